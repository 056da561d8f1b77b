use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFlashcardRequest {
    /// Front of the card
    #[serde(default)]
    pub title: String,
    /// Back of the card
    #[serde(default)]
    pub description: String,
}
