//! Registry of hosted models and their prompt templates.

/// Paraphrase models selectable by choice key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParaphraseModel {
    #[default]
    Pegasus,
    T5,
    FlanT5,
}

impl ParaphraseModel {
    /// Resolves a choice key (`pegasus`, `t5`, `flan`); unknown keys fall
    /// back to `fallback`.
    pub fn from_choice(choice: &str, fallback: ParaphraseModel) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "pegasus" => ParaphraseModel::Pegasus,
            "t5" => ParaphraseModel::T5,
            "flan" | "flan-t5" => ParaphraseModel::FlanT5,
            _ => fallback,
        }
    }

    pub fn model_id(&self) -> &'static str {
        match self {
            ParaphraseModel::Pegasus => "tuner007/pegasus_paraphrase",
            ParaphraseModel::T5 => "AventIQ-AI/t5-paraphrase-generation",
            ParaphraseModel::FlanT5 => "google/flan-t5-base",
        }
    }
}

/// Question-generation models selectable by choice key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionModel {
    #[default]
    T5Simple,
    T5Advanced,
}

impl QuestionModel {
    /// Resolves a choice key (`t5-simple`, `t5-advanced`); unknown keys fall
    /// back to `fallback`.
    pub fn from_choice(choice: &str, fallback: QuestionModel) -> Self {
        match choice.trim().to_ascii_lowercase().as_str() {
            "t5-simple" | "simple" => QuestionModel::T5Simple,
            "t5-advanced" | "advanced" => QuestionModel::T5Advanced,
            _ => fallback,
        }
    }

    pub fn model_id(&self) -> &'static str {
        match self {
            QuestionModel::T5Simple => "iarfmoose/t5-base-question-generator",
            QuestionModel::T5Advanced => "Avinash250325/T5BaseQuestionGeneration",
        }
    }

    /// Prompt asking for `count` questions about `text`.
    pub fn prompt(&self, text: &str, count: u32) -> String {
        match self {
            QuestionModel::T5Simple => format!(
                "Read the following passage and generate {count} clear study questions.\n\n\
                 Passage:\n{text}\n\nQuestions:"
            ),
            // Control tokens select answer type and difficulty.
            QuestionModel::T5Advanced => {
                format!("<extra_id_97>short answer <extra_id_98>easy <extra_id_99>[] {text}")
            }
        }
    }
}

/// Prompt sent to the fallback model when the primary paraphraser fails.
pub fn fallback_paraphrase_prompt(text: &str) -> String {
    format!(
        "Paraphrase the following text in fluent, natural English. \
         Provide diverse rephrasings.\n\nText: {text}\n\nParaphrases:"
    )
}
