use crate::{
    common::UsageMetadata,
    content::{Blob, Content, Part},
    error::{BuilderError, Error, FallibleResponse, Result},
    Client, Str,
};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, ops::RangeInclusive};

/// A requested content kind (text, image) for a generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum ResponseModality {
    Text,
    Image,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<ResponseModality>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u64>,
}

/// Given a prompt (and optionally an input image), the model will return a
/// generation response with an ordered sequence of content parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Generation {
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// [`Generation`] request builder
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBuilder<'a> {
    #[serde(skip)]
    model: Str<'a>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl Generation {
    /// Generates content for a single text prompt, with the endpoint's default
    /// response modalities.
    #[inline]
    pub async fn new<'a>(
        model: impl Into<Str<'a>>,
        prompt: impl Into<String>,
        client: impl AsRef<Client>,
    ) -> Result<Self> {
        return Self::builder(model).text(prompt).build(client).await;
    }

    /// Creates a new generation request builder
    #[inline]
    pub fn builder<'a>(model: impl Into<Str<'a>>) -> GenerateBuilder<'a> {
        return GenerateBuilder::new(model);
    }
}

impl Generation {
    /// Returns all response parts, across candidates, in response order
    #[inline]
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        return self
            .candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter());
    }

    /// Returns the concatenation of all text parts of the response
    pub fn text(&self) -> String {
        let mut text = String::new();
        for part in self.parts().filter_map(Part::as_text) {
            text.push_str(part);
        }
        return text;
    }

    /// Returns all inline-data parts of the response, in response order
    #[inline]
    pub fn inline_data(&self) -> impl Iterator<Item = &Blob> {
        return self.parts().filter_map(Part::as_inline_data);
    }
}

impl<'a> GenerateBuilder<'a> {
    /// Creates a new generation request builder
    pub fn new(model: impl Into<Cow<'a, str>>) -> Self {
        return Self {
            model: model.into(),
            contents: Vec::new(),
            generation_config: None,
        };
    }

    /// Appends a text part to the request's content
    #[inline]
    pub fn text(self, text: impl Into<String>) -> Self {
        return self.part(Part::text(text));
    }

    /// Appends an inline image part to the request's content
    #[inline]
    pub fn image(self, image: Blob) -> Self {
        return self.part(Part::inline_data(image));
    }

    /// Appends a raw part to the request's content
    pub fn part(mut self, part: Part) -> Self {
        match self.contents.last_mut() {
            Some(content) => content.parts.push(part),
            None => self.contents.push(Content::user([part])),
        }
        return self;
    }

    /// The content kinds the model should respond with. At least one modality
    /// must be requested.
    pub fn response_modalities<I: IntoIterator<Item = ResponseModality>>(
        mut self,
        modalities: I,
    ) -> Result<Self, BuilderError<Self>> {
        let modalities = modalities.into_iter().collect::<Vec<_>>();
        if modalities.is_empty() {
            return Err(BuilderError::msg(
                self,
                "at least one response modality must be requested",
            ));
        }

        self.config_mut().response_modalities = Some(modalities);
        return Ok(self);
    }

    /// What sampling temperature to use, between 0 and 2.
    pub fn temperature(mut self, temperature: f64) -> Result<Self, BuilderError<Self>> {
        const RANGE: RangeInclusive<f64> = 0f64..=2f64;
        return match RANGE.contains(&temperature) {
            true => {
                self.config_mut().temperature = Some(temperature);
                Ok(self)
            }
            false => Err(BuilderError::msg(
                self,
                format!("temperature out of range ({RANGE:?})"),
            )),
        };
    }

    /// The maximum number of tokens to generate in the response.
    pub fn max_output_tokens(mut self, max_output_tokens: u64) -> Self {
        self.config_mut().max_output_tokens = Some(max_output_tokens);
        return self;
    }

    #[inline]
    fn config_mut(&mut self) -> &mut GenerationConfig {
        return self.generation_config.get_or_insert_with(Default::default);
    }

    /// Sends the request
    pub async fn build(self, client: impl AsRef<Client>) -> Result<Generation> {
        if self.contents.iter().all(|content| content.parts.is_empty()) {
            return Err(Error::msg("generation request contains no content"));
        }

        let resp = client
            .as_ref()
            .post(format!("models/{}:generateContent", self.model))
            .json(&self)
            .send()
            .await?
            .json::<FallibleResponse<Generation>>()
            .await?
            .into_result()?;

        tracing::info!("content generated");
        return Ok(resp);
    }
}
