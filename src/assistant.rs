//! Data assistant facade: one question in, one analysis result out.
//!
//! `answer` is a pure function of the question and the loaded tables. It
//! classifies the question, replies directly for conversational intents, and
//! otherwise hands off to the query engine.

use crate::catalog::Catalog;
use crate::engine::QueryEngine;
use crate::intent::{self, Intent};
use crate::loader::Datasets;
use polars::prelude::DataFrame;
use tracing::info;

/// Which table(s) the attached data slice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Rainfall,
    Crops,
    Both,
}

/// Data slice backing an answer.
#[derive(Debug, Clone)]
pub enum AnswerData {
    Table(DataFrame),
    Both {
        rainfall: DataFrame,
        crops: DataFrame,
    },
}

/// The structured answer to one question. `text` is never empty; `data` and
/// `data_type` are present together or not at all.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub text: String,
    pub data: Option<AnswerData>,
    pub data_type: Option<DataType>,
}

impl AnalysisResult {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: None,
            data_type: None,
        }
    }

    pub fn with_table(text: String, data: DataFrame, data_type: DataType) -> Self {
        Self {
            text,
            data: Some(AnswerData::Table(data)),
            data_type: Some(data_type),
        }
    }

    pub fn with_both(text: String, rainfall: DataFrame, crops: DataFrame) -> Self {
        Self {
            text,
            data: Some(AnswerData::Both { rainfall, crops }),
            data_type: Some(DataType::Both),
        }
    }
}

const GREETING_REPLY: &str =
    "👋 Hello there! How can I help you explore the rainfall or crop production data today?";

const SMALL_TALK_REPLY: &str =
    "😊 I'm just a chatbot, but I'm doing great! Ready to analyze data for you.";

const CREATOR_REPLY: &str = "🤖 I was built by the AgriClimate Intelligence team to make open \
                             agriculture and climate data easier to explore!";

const IDENTITY_REPLY: &str = "🤖 My name is **AgriClimateBot** — your data assistant for \
                              agriculture and climate insights! 🌾☁️";

const FAREWELL_REPLY: &str = "👋 You're welcome! Have a wonderful day ahead 🌾";

const OFF_DOMAIN_REPLY: &str = "🤖 I'm **AgriClimateBot**, a data assistant built to analyze and \
explain **district rainfall and crop production datasets**. 🌾☁️\n\n\
I'm not designed for general conversation, but I can help you with agriculture and climate \
insights!\n\n\
💡 Try asking questions like:\n\
- Which district received the most rainfall?\n\
- Which crop had the highest productivity?\n\
- Compare rainfall between two districts.\n\
- What is the average rainfall across the state?";

pub struct DataAssistant {
    datasets: Datasets,
    catalog: Catalog,
}

impl DataAssistant {
    pub fn new(datasets: Datasets, catalog: Catalog) -> Self {
        Self { datasets, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Answer one question. Infallible: every path, including internal query
    /// failures, produces a non-empty text message.
    pub fn answer(&self, question: &str) -> AnalysisResult {
        let normalized = intent::normalize(question);
        let intent = intent::classify(&normalized);
        info!(?intent, "answering question");

        let engine = QueryEngine::new(&self.datasets, &self.catalog);
        match intent {
            Intent::Greeting => AnalysisResult::message(GREETING_REPLY),
            Intent::SmallTalk => AnalysisResult::message(SMALL_TALK_REPLY),
            Intent::Creator => AnalysisResult::message(CREATOR_REPLY),
            Intent::Identity => AnalysisResult::message(IDENTITY_REPLY),
            Intent::Farewell => AnalysisResult::message(FAREWELL_REPLY),
            Intent::OffDomain => AnalysisResult::message(OFF_DOMAIN_REPLY),
            Intent::RainfallSuperlative => engine.superlative_rainfall(),
            Intent::Rainfall => engine.rainfall(&normalized),
            Intent::Crop => engine.crops(&normalized),
            Intent::Correlation => engine.correlation(),
            Intent::Overview => engine.overview(),
        }
    }
}
