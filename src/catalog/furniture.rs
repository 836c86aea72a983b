use crate::error::{ConfigError, StyleError, StylerError};
use crate::styles::StyleId;

/// Per-style ordered furniture labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FurnitureCatalog {
    items: Vec<Vec<String>>,
}

impl FurnitureCatalog {
    /// Build a catalog, requiring a non-empty list for every style
    pub fn from_lists<'a, I>(lists: I) -> Result<Self, StylerError>
    where
        I: IntoIterator<Item = (StyleId, &'a [String])>,
    {
        let mut items: Vec<Option<Vec<String>>> = vec![None; StyleId::ALL.len()];

        for (style, labels) in lists {
            if labels.is_empty() || labels.iter().any(|l| l.trim().is_empty()) {
                return Err(StyleError::EmptyCatalog { style }.into());
            }
            items[style.index()] = Some(labels.to_vec());
        }

        let items = StyleId::ALL
            .iter()
            .zip(items)
            .map(|(style, slot)| {
                slot.ok_or_else(|| ConfigError::MissingKey {
                    key: format!("styles.{}.furniture", style.key()),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { items })
    }

    /// All labels for a style, in order
    pub fn items(&self, style: StyleId) -> &[String] {
        &self.items[style.index()]
    }

    /// The first `count` labels for a style (fewer if the list is shorter)
    pub fn first(&self, style: StyleId, count: usize) -> &[String] {
        let items = self.items(style);
        &items[..count.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_is_bounded() {
        let list = labels(&["Sofa", "Lamp"]);
        let catalog =
            FurnitureCatalog::from_lists(StyleId::ALL.iter().map(|&s| (s, list.as_slice()))).unwrap();

        assert_eq!(catalog.first(StyleId::Modern, 3), &list[..]);
        assert_eq!(catalog.first(StyleId::Modern, 1), &list[..1]);
    }

    #[test]
    fn test_missing_style_is_rejected() {
        let list = labels(&["Sofa"]);
        let result = FurnitureCatalog::from_lists([(StyleId::Industrial, list.as_slice())]);
        assert!(matches!(result, Err(StylerError::Config(ConfigError::MissingKey { .. }))));
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let list = labels(&["Sofa", "  "]);
        let result = FurnitureCatalog::from_lists(StyleId::ALL.iter().map(|&s| (s, list.as_slice())));
        assert!(matches!(result, Err(StylerError::Style(StyleError::EmptyCatalog { .. }))));
    }
}
