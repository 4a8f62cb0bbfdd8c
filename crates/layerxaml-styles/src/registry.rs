//! Style registry assigning stable keys to deduplicated text styles.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::descriptor::{FontAttributes, TextStyleDescriptor};
use crate::region::Region;

/// Key of a generated text style, written `txt{Region}_{N}`.
///
/// `N` is the 1-based position at which the style was first seen within its
/// region during one export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneratedKey {
    region: Region,
    index: u32,
}

impl GeneratedKey {
    pub fn region(&self) -> Region {
        self.region
    }

    /// The numeric suffix.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for GeneratedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txt{}_{}", self.region, self.index)
    }
}

impl Serialize for GeneratedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Structural identity of a text style within a region.
///
/// Two descriptors are the same style exactly when their signatures are
/// equal. The font size is kept in hundredths so near-identical sizes from
/// the design tool collapse together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleSignature {
    family: Option<(String, u16)>,
    size_hundredths: i64,
    color: String,
    align: String,
}

/// A style as recorded by the registry, with the fields needed to render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredStyle {
    pub key: GeneratedKey,
    /// `Family#weight`, absent when the family is ignored or unknown.
    pub font_family: Option<String>,
    /// Font size rounded to two decimals.
    pub font_size: f64,
    pub font_attributes: FontAttributes,
    pub text_color: Option<String>,
    pub text_align: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct RegistryEntry {
    next_index: u32,
    styles: IndexMap<StyleSignature, RegisteredStyle>,
}

/// Assigns keys to text styles for one export run.
///
/// The registry is partitioned per [`Region`]. Keys are never reassigned or
/// removed; the only way to start over is [`StyleRegistry::reset`] or a new
/// registry.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    ignore_font_family: bool,
    regions: [RegistryEntry; Region::COUNT],
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(false)
    }
}

impl StyleRegistry {
    /// Create an empty registry.
    ///
    /// With `ignore_font_family` set, family and weight take no part in style
    /// identity and are left out of registered styles.
    pub fn new(ignore_font_family: bool) -> Self {
        Self {
            ignore_font_family,
            regions: Default::default(),
        }
    }

    pub fn ignores_font_family(&self) -> bool {
        self.ignore_font_family
    }

    /// Compute the signature of a descriptor under this registry's settings.
    pub fn signature(&self, descriptor: &TextStyleDescriptor) -> StyleSignature {
        let family = if self.ignore_font_family {
            None
        } else {
            descriptor
                .font_family()
                .map(|family| (family.to_string(), descriptor.font_weight()))
        };

        StyleSignature {
            family,
            size_hundredths: descriptor.size_hundredths(),
            color: descriptor.color().unwrap_or_default().to_string(),
            align: descriptor.text_align().unwrap_or_default().to_string(),
        }
    }

    /// Return the key for a style, minting the next one in its region if the
    /// style has not been seen yet.
    pub fn key_for(&mut self, descriptor: &TextStyleDescriptor) -> GeneratedKey {
        let region = descriptor.region();
        let signature = self.signature(descriptor);
        let font_family = if self.ignore_font_family {
            None
        } else {
            descriptor.qualified_family()
        };

        let entry = &mut self.regions[region.index()];
        if let Some(existing) = entry.styles.get(&signature) {
            log::trace!("text style matched existing key {}", existing.key);
            return existing.key;
        }

        entry.next_index += 1;
        let key = GeneratedKey {
            region,
            index: entry.next_index,
        };
        let style = RegisteredStyle {
            key,
            font_family,
            font_size: signature.size_hundredths as f64 / 100.0,
            font_attributes: descriptor.font_attributes(),
            text_color: descriptor.color().map(str::to_string),
            text_align: descriptor.text_align().map(str::to_string),
        };
        entry.styles.insert(signature, style);

        log::debug!("registered text style {}", key);
        key
    }

    /// Forget every registered style and restart all regions at 1.
    pub fn reset(&mut self) {
        for entry in &mut self.regions {
            entry.next_index = 0;
            entry.styles.clear();
        }
    }

    /// Registered styles of one region, in key order.
    pub fn entries(
        &self,
        region: Region,
    ) -> indexmap::map::Values<'_, StyleSignature, RegisteredStyle> {
        self.regions[region.index()].styles.values()
    }

    /// Non-empty regions in display order with their styles in key order.
    pub fn groups(
        &self,
    ) -> impl Iterator<Item = (Region, indexmap::map::Values<'_, StyleSignature, RegisteredStyle>)>
    {
        Region::ALL
            .into_iter()
            .filter(|region| !self.regions[region.index()].styles.is_empty())
            .map(|region| (region, self.entries(region)))
    }

    /// Number of distinct styles in a region.
    pub fn region_len(&self, region: Region) -> usize {
        self.regions[region.index()].styles.len()
    }

    /// Total number of distinct styles.
    pub fn len(&self) -> usize {
        self.regions.iter().map(|entry| entry.styles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn style(size: f64, family: &str, weight: u16, color: &str, align: &str) -> TextStyleDescriptor {
        TextStyleDescriptor::new(size)
            .unwrap()
            .with_family(family, weight)
            .with_color(color)
            .with_align(align)
    }

    fn keys(registry: &mut StyleRegistry, styles: &[TextStyleDescriptor]) -> Vec<String> {
        styles
            .iter()
            .map(|s| registry.key_for(s).to_string())
            .collect()
    }

    #[test]
    fn test_duplicate_then_weight_change() {
        let mut registry = StyleRegistry::new(false);
        let styles = [
            style(24.0, "Roboto", 400, "#FF0000", "left"),
            style(24.0, "Roboto", 400, "#FF0000", "left"),
            style(24.0, "Roboto", 700, "#FF0000", "left"),
        ];

        assert_eq!(
            keys(&mut registry, &styles),
            ["txtHeadline5_1", "txtHeadline5_1", "txtHeadline5_2"]
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_rounding_collision() {
        let mut registry = StyleRegistry::new(false);
        let a = registry.key_for(&style(24.001, "Roboto", 400, "#FF0000", "left"));
        let b = registry.key_for(&style(24.004, "Roboto", 400, "#FF0000", "left"));
        let c = registry.key_for(&style(24.006, "Roboto", 400, "#FF0000", "left"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(c.to_string(), "txtHeadline5_2");
    }

    #[test]
    fn test_largest_sizes_keep_distinct_keys() {
        let mut registry = StyleRegistry::new(false);
        let a = registry.key_for(&TextStyleDescriptor::new(9.0e16).unwrap());
        let b = registry.key_for(&TextStyleDescriptor::new(9.1e16).unwrap());

        assert_ne!(a, b);
        let sizes: Vec<f64> = registry
            .entries(Region::Headline1)
            .map(|s| s.font_size)
            .collect();
        assert_eq!(sizes, [9.0e16, 9.1e16]);
    }

    #[test]
    fn test_ignore_font_family() {
        let roboto = style(16.0, "Roboto", 400, "#000000", "center");
        let inter = style(16.0, "Inter", 700, "#000000", "center");

        let mut ignoring = StyleRegistry::new(true);
        assert_eq!(ignoring.key_for(&roboto), ignoring.key_for(&inter));
        assert_eq!(ignoring.entries(Region::Subtitle1).next().unwrap().font_family, None);

        let mut strict = StyleRegistry::new(false);
        assert_ne!(strict.key_for(&roboto), strict.key_for(&inter));
    }

    #[test]
    fn test_weight_ignored_without_family() {
        let mut registry = StyleRegistry::new(false);
        let regular = TextStyleDescriptor::new(14.0).unwrap().with_weight(400);
        let bold = TextStyleDescriptor::new(14.0).unwrap().with_weight(700);
        assert_eq!(registry.key_for(&regular), registry.key_for(&bold));
    }

    #[test]
    fn test_missing_align_differs_from_named() {
        let mut registry = StyleRegistry::new(false);
        let plain = TextStyleDescriptor::new(12.0).unwrap();
        let left = plain.clone().with_align("left");
        assert_ne!(registry.key_for(&plain), registry.key_for(&left));
    }

    #[test]
    fn test_regions_never_collide() {
        let mut registry = StyleRegistry::new(false);
        let caption = registry.key_for(&style(13.0, "Roboto", 400, "#000000", "left"));
        let body = registry.key_for(&style(12.0, "Roboto", 400, "#000000", "left"));

        assert_eq!(caption.to_string(), "txtCaption_1");
        assert_eq!(body.to_string(), "txtBody2_1");
    }

    #[test]
    fn test_key_stable_across_interleaving() {
        let mut registry = StyleRegistry::new(false);
        let first = style(20.0, "Roboto", 400, "#111111", "left");
        let key = registry.key_for(&first);
        for i in 0..10 {
            registry.key_for(&style(20.0, "Roboto", 400, &format!("#00000{i}"), "left"));
        }
        assert_eq!(registry.key_for(&first), key);
        assert_eq!(registry.region_len(Region::Headline6), 11);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut registry = StyleRegistry::new(false);
        registry.key_for(&style(50.0, "Roboto", 400, "#000000", "left"));
        registry.key_for(&style(50.0, "Roboto", 700, "#000000", "left"));
        registry.reset();

        assert!(registry.is_empty());
        let key = registry.key_for(&style(50.0, "Roboto", 700, "#000000", "left"));
        assert_eq!(key.to_string(), "txtHeadline1_1");
    }

    #[test]
    fn test_groups_in_display_order() {
        let mut registry = StyleRegistry::new(false);
        registry.key_for(&style(10.0, "Roboto", 400, "#000000", "left"));
        registry.key_for(&style(11.0, "Roboto", 400, "#000000", "left"));
        registry.key_for(&style(60.0, "Roboto", 400, "#000000", "left"));
        registry.key_for(&style(60.0, "Roboto", 700, "#000000", "left"));

        let groups: Vec<(Region, Vec<String>)> = registry
            .groups()
            .map(|(region, styles)| (region, styles.map(|s| s.key.to_string()).collect()))
            .collect();

        assert_eq!(
            groups,
            vec![
                (
                    Region::Headline1,
                    vec!["txtHeadline1_1".to_string(), "txtHeadline1_2".to_string()]
                ),
                (Region::Body1, vec!["txtBody1_1".to_string()]),
                (Region::Caption, vec!["txtCaption_1".to_string()]),
            ]
        );
    }

    #[test]
    fn test_registered_style_fields() {
        let mut registry = StyleRegistry::new(false);
        registry.key_for(&style(24.004, "Roboto", 700, "{StaticResource Primary}", "left"));

        let registered = registry.entries(Region::Headline5).next().unwrap();
        assert_eq!(registered.font_family.as_deref(), Some("Roboto#700"));
        assert_eq!(registered.font_size, 24.0);
        assert_eq!(registered.font_attributes, FontAttributes::Bold);
        assert_eq!(registered.text_color.as_deref(), Some("{StaticResource Primary}"));
        assert_eq!(registered.text_align.as_deref(), Some("left"));
    }

    #[test]
    fn test_key_serializes_as_string() {
        let mut registry = StyleRegistry::new(false);
        let key = registry.key_for(&TextStyleDescriptor::new(28.0).unwrap());
        assert_eq!(
            serde_json::to_string(&key).unwrap(),
            "\"txtHeadline4_1\""
        );
    }

    fn arb_descriptor() -> impl Strategy<Value = TextStyleDescriptor> {
        (
            prop::sample::select(vec![10.0, 11.0, 12.0, 14.0, 16.0, 17.5, 24.0, 24.004, 32.0, 50.0]),
            prop::option::of(prop::sample::select(vec!["Roboto", "Inter"])),
            prop::sample::select(vec![400u16, 700]),
            prop::option::of(prop::sample::select(vec!["#000000", "#FF0000"])),
            prop::option::of(prop::sample::select(vec!["left", "center"])),
        )
            .prop_map(|(size, family, weight, color, align)| {
                let mut d = TextStyleDescriptor::new(size).unwrap().with_weight(weight);
                if let Some(family) = family {
                    d = d.with_family(family, weight);
                }
                if let Some(color) = color {
                    d = d.with_color(color);
                }
                if let Some(align) = align {
                    d = d.with_align(align);
                }
                d
            })
    }

    proptest! {
        #[test]
        fn prop_same_signature_same_key(styles in prop::collection::vec(arb_descriptor(), 1..40)) {
            let mut registry = StyleRegistry::new(false);
            let keys: Vec<GeneratedKey> = styles.iter().map(|s| registry.key_for(s)).collect();

            for (i, a) in styles.iter().enumerate() {
                for (j, b) in styles.iter().enumerate() {
                    let same = a.region() == b.region() && registry.signature(a) == registry.signature(b);
                    prop_assert_eq!(same, keys[i] == keys[j]);
                }
            }
        }

        #[test]
        fn prop_suffixes_are_sequential(styles in prop::collection::vec(arb_descriptor(), 0..40)) {
            let mut registry = StyleRegistry::new(false);
            let mut seen: Vec<Vec<u32>> = vec![Vec::new(); Region::COUNT];
            for s in &styles {
                let key = registry.key_for(s);
                let issued = &mut seen[key.region().index()];
                if !issued.contains(&key.index()) {
                    issued.push(key.index());
                }
            }

            for (region, issued) in Region::ALL.iter().zip(&seen) {
                let expected: Vec<u32> = (1..=issued.len() as u32).collect();
                prop_assert_eq!(issued, &expected);
                let listed: Vec<u32> = registry.entries(*region).map(|s| s.key.index()).collect();
                prop_assert_eq!(&listed, &expected);
            }
        }

        #[test]
        fn prop_reset_reproduces_keys(
            styles in prop::collection::vec(arb_descriptor(), 0..40),
            ignore in any::<bool>(),
        ) {
            let mut registry = StyleRegistry::new(ignore);
            let first: Vec<GeneratedKey> = styles.iter().map(|s| registry.key_for(s)).collect();
            registry.reset();
            let second: Vec<GeneratedKey> = styles.iter().map(|s| registry.key_for(s)).collect();
            prop_assert_eq!(first, second);
        }
    }
}
