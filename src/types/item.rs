use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub model: i32,
    pub price: f64,
    pub tint: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub model: Option<i32>,
    pub price: Option<f64>,
    // omitted leaves the flag alone; an explicit null clears it (put only)
    #[serde(
        default,
        deserialize_with = "tint_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub tint: Option<Option<bool>>,
}

fn tint_field<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Some)
}
