use serde::Deserialize;

/// Value of `Type` the source uses for a successful response.
pub(crate) const TYPE_SUCCESS: i64 = 100;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    #[serde(rename = "Type")]
    pub(crate) type_code: Option<i64>,
    #[serde(rename = "Message")]
    pub(crate) message: Option<String>,
    #[serde(rename = "Data")]
    pub(crate) data: Option<Vec<RawArticle>>,
}

#[derive(Deserialize)]
pub(crate) struct RawArticle {
    pub(crate) title: Option<String>,
    pub(crate) body: Option<String>,
    pub(crate) published_on: Option<i64>,
    pub(crate) url: Option<String>,
    pub(crate) source: Option<String>,
}
