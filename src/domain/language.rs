#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "es" => Language::Spanish,
            _ => Language::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Language::English => {
                "Analyze the following git diff and generate a concise commit title (max 70 chars) and a detailed commit description. Respond in JSON format according to the schema:"
            }
            Language::Spanish => {
                "Analiza el siguiente git diff y genera un título de commit conciso (máx. 70 caracteres) y una descripción detallada del commit. Responde en formato JSON de acuerdo con el esquema:"
            }
        }
    }

    pub fn title_field_description(&self) -> &'static str {
        match self {
            Language::English => "Concise commit message title",
            Language::Spanish => "Título conciso del mensaje de commit",
        }
    }

    pub fn description_field_description(&self) -> &'static str {
        match self {
            Language::English => "Detailed commit message description",
            Language::Spanish => "Descripción detallada del mensaje de commit",
        }
    }
}
