use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::config;
use crate::error::UiError;

/// One title on the page. Only `id`, `title` and `image` are guaranteed;
/// everything else is filled with display defaults by whoever shows it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContentRecord {
    pub id: u32,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

impl ContentRecord {
    pub fn full_image_url(&self) -> &str {
        &self.image
    }

    /// Card-sized variant of the image. URLs without a size segment are
    /// used as they are.
    pub fn card_image_url(&self) -> String {
        let full = format!("/{}/", config::IMAGE_FULL_SIZE);
        let card = format!("/{}/", config::IMAGE_CARD_SIZE);
        if self.image.contains(&full) {
            self.image.replacen(&full, &card, 1)
        } else {
            self.image.clone()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Trending,
    Popular,
    Top10,
}

impl GroupKey {
    pub const ALL: [GroupKey; 3] = [GroupKey::Trending, GroupKey::Popular, GroupKey::Top10];

    pub fn key(self) -> &'static str {
        match self {
            GroupKey::Trending => "trending",
            GroupKey::Popular => "popular",
            GroupKey::Top10 => "top10",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            GroupKey::Trending => "Trending Now",
            GroupKey::Popular => "Popular on Reelview",
            GroupKey::Top10 => "Top 10 Today",
        }
    }

    /// Rows that show a rank number next to each card.
    pub fn is_ranked(self) -> bool {
        matches!(self, GroupKey::Top10)
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    trending: Vec<ContentRecord>,
    #[serde(default)]
    popular: Vec<ContentRecord>,
    #[serde(default)]
    top10: Vec<ContentRecord>,
}

#[derive(Debug, Default, PartialEq)]
pub struct Catalog {
    groups: Vec<(GroupKey, Vec<ContentRecord>)>,
}

impl Catalog {
    pub fn from_json(source: &str) -> Result<Self, UiError> {
        let file: CatalogFile =
            serde_json::from_str(source).map_err(|e| UiError::Catalog(e.to_string()))?;
        Ok(Self {
            groups: vec![
                (GroupKey::Trending, file.trending),
                (GroupKey::Popular, file.popular),
                (GroupKey::Top10, file.top10),
            ],
        })
    }

    /// Records of a group, in page order. Unknown or empty groups yield an
    /// empty slice.
    pub fn group(&self, key: GroupKey) -> &[ContentRecord] {
        self.groups
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(include_str!("../assets/catalog.json")).unwrap_or_else(|e| {
        log::error!("{}", e);
        Catalog::default()
    })
});

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_has_every_group() {
        for key in GroupKey::ALL {
            assert!(!catalog().group(key).is_empty(), "{} is empty", key.key());
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let mut ids: Vec<u32> = GroupKey::ALL
            .iter()
            .flat_map(|key| catalog().group(*key).iter().map(|r| r.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let catalog = Catalog::from_json(
            r#"{"popular": [{"id": 7, "title": "Bare", "image": "https://x/original/a.jpg"}]}"#,
        )
        .unwrap();

        let record = &catalog.group(GroupKey::Popular)[0];
        assert_eq!(record.year, None);
        assert!(record.genres.is_empty());
        assert!(catalog.group(GroupKey::Trending).is_empty());
        assert_eq!(record.title, "Bare");
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{\"trending\": 3}"),
            Err(UiError::Catalog(_))
        ));
    }

    #[test]
    fn card_image_is_downscaled() {
        let record = catalog().group(GroupKey::Trending)[0].clone();
        assert_eq!(
            record.card_image_url(),
            record.image.replace("/original/", "/w500/")
        );
        assert!(record.full_image_url().contains("/original/"));

        let local = ContentRecord {
            image: "/assets/poster.jpg".to_string(),
            ..record
        };
        assert_eq!(local.card_image_url(), "/assets/poster.jpg");
    }
}
