//! In-memory library store.
//!
//! The store is the REST collaborator's source of truth, including
//! referential integrity: a component's `category_id` must resolve to an
//! existing category at creation time, and components are never deleted,
//! so the reference holds for its lifetime. `component_count` on listed
//! categories is derived here, never stored.

use std::collections::HashMap;

use chrono::Utc;
use snipvault_common::{
    Category, Component, FragmentPatch, NewCategory, NewComponent, StoreError,
};
use snipvault_editor::FragmentStore;

pub struct LibraryStore {
    categories: HashMap<u32, Category>,
    components: HashMap<u32, Component>,
    next_category_id: u32,
    next_component_id: u32,
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryStore {
    pub fn new() -> Self {
        Self {
            categories: HashMap::new(),
            components: HashMap::new(),
            next_category_id: 1,
            next_component_id: 1,
        }
    }

    /// Categories ordered by id, with derived component counts.
    pub fn list_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .values()
            .map(|category| {
                let mut category = category.clone();
                category.component_count = self
                    .components
                    .values()
                    .filter(|c| c.category_id == category.id)
                    .count() as u32;
                category
            })
            .collect();
        categories.sort_by_key(|c| c.id);
        categories
    }

    pub fn create_category(&mut self, new: NewCategory) -> Result<Category, StoreError> {
        if new.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Category name is required".to_string(),
            ));
        }

        let id = self.next_category_id;
        self.next_category_id += 1;

        let category = Category {
            id,
            name: new.name,
            icon: new.icon,
            description: new.description,
            component_count: 0,
        };
        self.categories.insert(id, category.clone());
        tracing::info!(id, name = %category.name, "created category");
        Ok(category)
    }

    /// Components of one category, ordered by id.
    pub fn list_components(&self, category_id: u32) -> Vec<Component> {
        let mut components: Vec<Component> = self
            .components
            .values()
            .filter(|c| c.category_id == category_id)
            .cloned()
            .collect();
        components.sort_by_key(|c| c.id);
        components
    }

    pub fn get_component(&self, id: u32) -> Result<Component, StoreError> {
        self.components
            .get(&id)
            .cloned()
            .ok_or(StoreError::ComponentNotFound(id))
    }

    pub fn create_component(&mut self, new: NewComponent) -> Result<Component, StoreError> {
        if new.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Component name is required".to_string(),
            ));
        }
        if new.fragments.markup.trim().is_empty() {
            return Err(StoreError::Validation("HTML code is required".to_string()));
        }
        if !self.categories.contains_key(&new.category_id) {
            return Err(StoreError::CategoryNotFound(new.category_id));
        }

        let id = self.next_component_id;
        self.next_component_id += 1;

        let component = Component {
            id,
            name: new.name,
            description: new.description,
            category_id: new.category_id,
            fragments: new.fragments,
            tags: new.tags,
            active: true,
            created_at: Utc::now(),
        };
        self.components.insert(id, component.clone());
        tracing::info!(id, name = %component.name, "created component");
        Ok(component)
    }

    /// Partial fragment update. Nothing is mutated when the id is unknown.
    pub fn update_component(
        &mut self,
        id: u32,
        patch: &FragmentPatch,
    ) -> Result<Component, StoreError> {
        let component = self
            .components
            .get_mut(&id)
            .ok_or(StoreError::ComponentNotFound(id))?;
        patch.apply_to(&mut component.fragments);
        tracing::info!(id, "updated component fragments");
        Ok(component.clone())
    }
}

impl FragmentStore for LibraryStore {
    fn update_fragments(
        &mut self,
        id: u32,
        patch: &FragmentPatch,
    ) -> Result<Component, StoreError> {
        self.update_component(id, patch)
    }
}
