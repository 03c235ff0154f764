use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{plant::PlantRecord, Footprint};

/// Reads an optional choice field as sent by the designer. A blank value
/// selects the enum's "none" sentinel; an unrecognised one is logged and
/// treated the same way.
mod lenient_choice {
    use serde::{de::DeserializeOwned, Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let Some(raw) = Option::<serde_json::Value>::deserialize(d)? else {
            return Ok(None);
        };
        if raw.as_str().is_some_and(|s| s.trim().is_empty()) {
            return Ok(Some(T::default()));
        }
        Ok(Some(T::deserialize(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring unrecognised option {raw}: {e}");
            T::default()
        })))
    }
}

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Builds a `Links` map from `(relation, href, method)` triples.
pub fn links<const N: usize>(entries: [(&str, String, Method); N]) -> Links {
    entries
        .into_iter()
        .map(|(rel, href, method)| (rel.to_string(), link(href, method)))
        .collect()
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Metadata for a list returned in one page.
    pub fn single_page(total: usize) -> Self {
        Self {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        }
    }
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Plant record as returned by the catalogue endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantResponse {
    #[serde(flatten)]
    pub plant: PlantRecord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ViewSeason {
    Spring,
    Summer,
    #[serde(alias = "automn")]
    Autumn,
    Winter,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum GardenStyle {
    Meadow,
    InsectFriendly,
    RainGarden,
    Children,
    Healing,
    Rock,
    Edible,
    #[default]
    None,
}

impl GardenStyle {
    /// The catalogue tag for this style; `None` for the "no style" sentinel.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            GardenStyle::Meadow => Some("观赏草甸"),
            GardenStyle::InsectFriendly => Some("昆虫友好花园"),
            GardenStyle::RainGarden => Some("雨水花园"),
            GardenStyle::Children => Some("儿童花园"),
            GardenStyle::Healing => Some("疗愈花园"),
            GardenStyle::Rock => Some("岩石花园"),
            GardenStyle::Edible => Some("可食花园"),
            GardenStyle::None => None,
        }
    }
}

/// Optional narrowing of the plant catalogue.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Whitelist of plant names; an empty list is treated as no selection.
    pub selected_plants: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_choice::deserialize")]
    pub view_season: Option<ViewSeason>,
    #[serde(default, deserialize_with = "lenient_choice::deserialize")]
    pub style: Option<GardenStyle>,
    /// Site latitude in degrees.
    pub lat: Option<f64>,
}

/// Body of `POST /api/zones`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequest {
    #[serde(default)]
    pub building_positions: Vec<Footprint>,
    #[serde(default)]
    pub wall_positions: Vec<Footprint>,
    #[serde(default)]
    pub water_positions: Vec<Footprint>,
    #[serde(default)]
    pub flower_positions: Vec<Footprint>,
    #[serde(default)]
    pub property: Option<Property>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
