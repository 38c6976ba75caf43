use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ModelInfo {
    pub id: String,
}

#[derive(Deserialize, Debug)]
pub struct ModelsApiResponse {
    pub data: Vec<ModelInfo>,
}
