use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatuteRecord {
    pub title: String,
    pub date_of_assent: String,
    pub effective_date: String,
    pub date_of_gazette: String,
    pub list_of_sections: String,
    pub preamble: String,
    pub schedule: Schedule,
    pub pre_sections_text: String,
    pub sections: Vec<Section>,
    pub footnotes: String,
    pub endnotes: String,
    pub statute_id: String,
    pub is_date_of_assent_unavailable: bool,
    pub is_effective_date_unavailable: bool,
    pub is_date_of_gazette_unavailable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub key: Option<String>,
    pub content: String,
    pub tables: Vec<Table>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub row_count: usize,
    pub col_count: usize,
    pub name: Option<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub content: String,
    pub tables: Vec<Table>,
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub alt_text: String,
    pub link: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub sections: usize,
    pub tables: usize,
    pub images: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEntry {
    pub relative_path: String,
    pub size_bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInventoryManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub pipeline: String,
    pub source_directory: String,
    pub input_count: usize,
    pub inputs: Vec<InputEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertPaths {
    pub input_root: String,
    pub output_root: String,
    pub manifest_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertCounts {
    pub processed_count: usize,
    pub copied_count: usize,
    pub failed_count: usize,
    pub directory_count: usize,
    pub section_count: usize,
    pub table_count: usize,
    pub image_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedDocument {
    pub relative_path: String,
    pub output_path: String,
    pub sha256: String,
    pub section_count: usize,
    pub table_count: usize,
    pub image_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub engine_version: String,
    pub pipeline: String,
    pub status: String,
    pub started_at: String,
    pub updated_at: String,
    pub command: String,
    pub paths: ConvertPaths,
    pub counts: ConvertCounts,
    pub documents: Vec<ConvertedDocument>,
    pub warnings: Vec<String>,
}
