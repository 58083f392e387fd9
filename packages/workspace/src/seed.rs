//! Seed data: a starter Buttons category with a few sample components so
//! a fresh server has something to browse.

use snipvault_common::{Fragments, NewCategory, NewComponent};

use crate::store::LibraryStore;

impl LibraryStore {
    /// A store pre-populated with the sample library.
    pub fn with_samples() -> Self {
        let mut store = Self::new();

        // Seeding a fresh store cannot fail; the sample payloads are valid.
        let buttons = store
            .create_category(NewCategory {
                name: "Buttons".to_string(),
                icon: "fas fa-square".to_string(),
                description: Some("Clickable button styles".to_string()),
            })
            .expect("seed category is valid");

        for sample in sample_buttons(buttons.id) {
            store
                .create_component(sample)
                .expect("seed component is valid");
        }

        store
    }
}

fn sample_buttons(category_id: u32) -> Vec<NewComponent> {
    vec![
        NewComponent {
            name: "Primary Button".to_string(),
            description: Some("Basic primary action button".to_string()),
            category_id,
            fragments: Fragments::new(
                "<button class=\"primary-btn\">Primary Button</button>",
                ".primary-btn {\n  background-color: #3b82f6;\n  color: white;\n  padding: 0.75rem 1.5rem;\n  border-radius: 0.5rem;\n  font-weight: 500;\n  transition: background-color 0.2s;\n}\n\n.primary-btn:hover {\n  background-color: #2563eb;\n}",
                "// Add click handler\ndocument.querySelector('.primary-btn').addEventListener('click', function() {\n  console.log('Primary button clicked!');\n});",
            ),
            tags: vec!["primary".to_string(), "basic".to_string(), "blue".to_string()],
        },
        NewComponent {
            name: "Outline Button".to_string(),
            description: Some("Secondary action style button".to_string()),
            category_id,
            fragments: Fragments::new(
                "<button class=\"outline-btn\">Secondary Button</button>",
                ".outline-btn {\n  border: 2px solid #d1d5db;\n  color: #374151;\n  padding: 0.75rem 1.5rem;\n  border-radius: 0.5rem;\n  font-weight: 500;\n  background: transparent;\n  transition: border-color 0.2s;\n}\n\n.outline-btn:hover {\n  border-color: #9ca3af;\n}",
                "// Add hover effect\nconst btn = document.querySelector('.outline-btn');\nbtn.addEventListener('mouseenter', () => btn.style.transform = 'scale(1.02)');\nbtn.addEventListener('mouseleave', () => btn.style.transform = 'scale(1)');",
            ),
            tags: vec!["secondary".to_string(), "outline".to_string(), "gray".to_string()],
        },
        NewComponent {
            name: "Gradient Icon Button".to_string(),
            description: Some("Eye-catching CTA with icon".to_string()),
            category_id,
            fragments: Fragments::new(
                "<button class=\"gradient-btn\"><i class=\"fas fa-star\"></i> Gradient Button</button>",
                ".gradient-btn {\n  background: linear-gradient(to right, #8b5cf6, #ec4899);\n  color: white;\n  padding: 0.75rem 1.5rem;\n  border-radius: 0.5rem;\n  font-weight: 500;\n  transition: all 0.2s;\n  display: inline-flex;\n  align-items: center;\n  gap: 0.5rem;\n}",
                "// Add click animation\ndocument.querySelector('.gradient-btn').addEventListener('click', function() {\n  this.style.transform = 'scale(0.98)';\n  setTimeout(() => { this.style.transform = 'scale(1)'; }, 120);\n});",
            ),
            tags: vec!["gradient".to_string(), "icon".to_string(), "cta".to_string()],
        },
    ]
}
