//! Plain-text reports returned by the CLI and the tool server

use crate::catalog::{Catalog, ComponentRecord, DemoRecord};
use crate::demo::DemoMatch;

/// Render one section per query, in query order, separated by blank lines
pub fn demo_report(matches: &[DemoMatch<'_>]) -> String {
    matches
        .iter()
        .map(|m| match m.demo {
            Some(demo) => format!(
                "### {} - {}\n```razor\n{}\n```",
                m.query.component, demo.scenario, demo.source
            ),
            None => format!(
                "### {} - {}\nDemo not found.",
                m.query.component, m.query.scenario
            ),
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Component, scenario and description of every demo
pub fn demo_list(demos: &[DemoRecord]) -> String {
    if demos.is_empty() {
        return "No demos found.".to_string();
    }

    demos
        .iter()
        .map(|d| {
            format!(
                "Component: {}\nScenario: {}\nDescription: {}",
                d.component, d.scenario, d.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Details of a single component, including its demo scenarios
pub fn component_details(catalog: &Catalog, component: &ComponentRecord) -> String {
    let mut output = format!("Component: {}\n", component.title);
    if !component.sub_title.is_empty() {
        output.push_str(&format!("Subtitle: {}\n", component.sub_title));
    }
    output.push_str(&format!("Category: {}\n", component.category));
    if !component.description.is_empty() {
        output.push_str(&format!("Description: {}\n", component.description));
    }

    let scenarios: Vec<&str> = catalog
        .demos_of(component)
        .iter()
        .map(|d| d.scenario.as_str())
        .collect();
    if scenarios.is_empty() {
        output.push_str("Demos: none");
    } else {
        output.push_str(&format!("Demos: {}", scenarios.join(", ")));
    }

    output
}

/// Details for the named component, or a not-found line
pub fn component_lookup(catalog: &Catalog, name: &str) -> String {
    match catalog.find_component(name) {
        Some(component) => component_details(catalog, component),
        None => format!("Component '{}' not found.", name),
    }
}

/// Titles of every component in catalog order
pub fn component_list(catalog: &Catalog) -> String {
    if catalog.components().is_empty() {
        return "No components found.".to_string();
    }

    let mut output = String::from("Available components:");
    for component in catalog.components() {
        output.push_str(&format!("\n  {}", component.title));
    }
    output
}

/// Titles of the components in `category`
pub fn category_listing(catalog: &Catalog, category: &str) -> String {
    let titles: Vec<&str> = catalog
        .components_in_category(category)
        .map(|c| c.title.as_str())
        .collect();

    if titles.is_empty() {
        return format!("No components found in category '{}'.", category);
    }

    let mut output = format!("Components in category '{}':", category);
    for title in titles {
        output.push_str(&format!("\n  {}", title));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::demo::QueryPair;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        parse_catalog(
            br#"[
                {"Title": "Button", "SubTitle": "Btn", "Category": "General", "Desc": "Clickable.", "DemoList": [
                    {"Title": "Icon", "Description": "With icon", "Code": "<Button Icon=\"search\" />"},
                    {"Title": "Block", "Code": "<Button Block />"}
                ]},
                {"Title": "Affix", "Category": "Navigation"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_demo_report_sections() {
        let catalog = catalog();
        let matches = vec![
            DemoMatch {
                query: QueryPair::new("button", "icon"),
                demo: Some(&catalog.demos()[0]),
            },
            DemoMatch {
                query: QueryPair::new("Table", "pagination"),
                demo: None,
            },
        ];

        assert_eq!(
            demo_report(&matches),
            "### button - Icon\n```razor\n<Button Icon=\"search\" />\n```\n\n### Table - pagination\nDemo not found."
        );
    }

    #[test]
    fn test_demo_report_empty_batch() {
        assert_eq!(demo_report(&[]), "");
    }

    #[test]
    fn test_demo_list() {
        let catalog = catalog();
        assert_eq!(
            demo_list(catalog.demos()),
            "Component: Button\nScenario: Icon\nDescription: With icon\n\nComponent: Button\nScenario: Block\nDescription: "
        );
        assert_eq!(demo_list(&[]), "No demos found.");
    }

    #[test]
    fn test_component_lookup() {
        let catalog = catalog();
        assert_eq!(
            component_lookup(&catalog, "BUTTON"),
            "Component: Button\nSubtitle: Btn\nCategory: General\nDescription: Clickable.\nDemos: Icon, Block"
        );
        assert_eq!(
            component_lookup(&catalog, "affix"),
            "Component: Affix\nCategory: Navigation\nDemos: none"
        );
        assert_eq!(component_lookup(&catalog, "Foo"), "Component 'Foo' not found.");
    }

    #[test]
    fn test_component_list_and_category() {
        let catalog = catalog();
        assert_eq!(component_list(&catalog), "Available components:\n  Button\n  Affix");
        assert_eq!(component_list(&Catalog::default()), "No components found.");
        assert_eq!(
            category_listing(&catalog, "navigation"),
            "Components in category 'navigation':\n  Affix"
        );
        assert_eq!(
            category_listing(&catalog, "Feedback"),
            "No components found in category 'Feedback'."
        );
    }
}
