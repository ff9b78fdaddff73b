/// A template that can be passed to `--template`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub const DEFAULT_TEMPLATE: &str = "python-fastapi";

/// Templates published in the registry.
pub const CATALOG: &[TemplateInfo] = &[TemplateInfo {
    name: "python-fastapi",
    description: "Minimal FastAPI server with OpenAI + Helicone",
}];

pub fn find(name: &str) -> Option<&'static TemplateInfo> {
    CATALOG.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_is_in_catalog() {
        assert!(find(DEFAULT_TEMPLATE).is_some());
    }

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_unknown_template() {
        assert!(find("cobol-mainframe").is_none());
    }
}
