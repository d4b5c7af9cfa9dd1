#![allow(dead_code)]

//! Shared test fixtures: deterministic mock providers and a PDF builder

use async_trait::async_trait;
use std::sync::Arc;

use policy_rag::config::RetrievalConfig;
use policy_rag::error::{Error, Result};
use policy_rag::providers::{EmbeddingProvider, LlmProvider};
use policy_rag::Pipeline;

/// Fold a text's bytes into a small fixed-dimension vector. Deterministic, so
/// reruns of the pipeline are bit-identical.
pub fn fold_embedding(text: &str) -> Vec<f32> {
    let mut v = [0.0f32; 4];
    for (i, b) in text.bytes().enumerate() {
        v[i % 4] += b as f32;
    }
    v.to_vec()
}

/// Deterministic embedder over `fold_embedding`
pub struct HashEmbedder;

#[async_trait]
impl EmbeddingProvider for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(fold_embedding(text))
    }

    fn name(&self) -> &str {
        "hash-mock"
    }
}

/// Embedder that fails only for one specific text; batches (document
/// embedding) always succeed
pub struct SelectiveEmbedder {
    pub fail_on: String,
}

#[async_trait]
impl EmbeddingProvider for SelectiveEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if text == self.fail_on {
            return Err(Error::EmbeddingService(
                "embedding service unavailable".to_string(),
            ));
        }
        Ok(fold_embedding(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| fold_embedding(t)).collect())
    }

    fn name(&self) -> &str {
        "selective-mock"
    }
}

/// Embedder whose batch endpoint is down; single embeddings still succeed
pub struct BatchFailEmbedder;

#[async_trait]
impl EmbeddingProvider for BatchFailEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(fold_embedding(text))
    }

    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(Error::EmbeddingService(
            "embedding service returned 503".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "batch-fail-mock"
    }
}

/// LLM that answers with the question it was asked, as valid JSON
pub struct EchoLlm;

#[async_trait]
impl LlmProvider for EchoLlm {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let question = prompt
            .lines()
            .find_map(|line| line.strip_prefix("Question: "))
            .unwrap_or("")
            .replace('"', "'");
        Ok(format!(
            r#"{{"answer":"{}","clause":"clause","section":"section","page":1,"rationale":"echo"}}"#,
            question
        ))
    }

    fn model(&self) -> &str {
        "echo"
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// LLM that always returns the same raw text
pub struct FixedLlm(pub String);

#[async_trait]
impl LlmProvider for FixedLlm {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.clone())
    }

    fn model(&self) -> &str {
        "fixed"
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Pipeline over the given mock providers with default retrieval settings
pub fn pipeline_with(
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
) -> Pipeline {
    Pipeline::new(embedder, llm, &RetrievalConfig::default())
}

/// Build a one-page PDF containing `text`
pub fn one_page_pdf(text: &str) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("encode content stream"),
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize PDF");
    buf
}
