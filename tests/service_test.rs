//! Workflow tests for BlindboxService using in-process trait fakes.
//!
//! Client HTTP behavior is covered by the wiremock tests; these tests pin
//! the orchestration semantics: message shaping, sampling parameters,
//! strict interpretation parsing, ordering, soft drops and hard aborts.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blindbox::{
    BlindboxError, BlindboxService, ChatOptions, ImageOptions, ImageSynthesis, ImageryPair,
    Message, Result, Role, TextGeneration,
};

const VALID_REPLY: &str = r#"[
    {"id": 1, "imagery1": "孙悟空的小猴", "imagery2": "流线型的鱼尾"},
    {"id": 2, "imagery1": "鲜嫩竹笋", "imagery2": "红色锦鲤"},
    {"id": 3, "imagery1": "孙大圣的猴", "imagery2": "灵动的小鱼尾"}
]"#;

/// Text fake: always returns the same reply, records every call.
#[derive(Clone)]
struct FixedText {
    reply: String,
    calls: Arc<Mutex<Vec<(Vec<Message>, ChatOptions)>>>,
}

impl FixedText {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl TextGeneration for FixedText {
    async fn generate_text(&self, messages: &[Message], options: &ChatOptions) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), options.clone()));
        Ok(self.reply.clone())
    }
}

/// One scripted image response per call.
enum ImageScript {
    Batch(Vec<&'static str>),
    RateLimited,
}

/// Image fake: plays back a script, records every prompt.
#[derive(Clone)]
struct ScriptedImages {
    script: Arc<Mutex<VecDeque<ImageScript>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    options_seen: Arc<Mutex<Vec<ImageOptions>>>,
}

impl ScriptedImages {
    fn new(script: Vec<ImageScript>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            options_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ImageSynthesis for ScriptedImages {
    async fn generate_images(&self, prompt: &str, options: &ImageOptions) -> Result<Vec<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.options_seen.lock().unwrap().push(options.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(ImageScript::Batch(urls)) => {
                Ok(urls.into_iter().map(str::to_string).collect())
            }
            Some(ImageScript::RateLimited) => Err(BlindboxError::RateLimited {
                message: "scripted".to_string(),
            }),
            None => panic!("image fake called more times than scripted"),
        }
    }
}

fn one_url(url: &'static str) -> ImageScript {
    ImageScript::Batch(vec![url])
}

#[tokio::test]
async fn interpret_name_returns_three_combinations() {
    let text = FixedText::new(VALID_REPLY);
    let service = BlindboxService::new(text.clone(), ScriptedImages::new(vec![]));

    let interpretation = service.interpret_name("孙小鱼").await.unwrap();
    let combos = interpretation.combinations();
    assert_eq!(combos.len(), 3);
    let mut ids: Vec<u32> = combos.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 2, 3]);
}

/// Interpretation wraps the prompt in a two-message exchange: fixed system
/// persona, then the user prompt carrying the name. Sampling is 1.2 / 0.9.
#[tokio::test]
async fn interpret_name_shapes_exchange_and_sampling() {
    let text = FixedText::new(VALID_REPLY);
    let service = BlindboxService::new(text.clone(), ScriptedImages::new(vec![]));

    service.interpret_name("孙小鱼").await.unwrap();

    let calls = text.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (messages, options) = &calls[0];
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
    assert!(messages[1].content.contains("孙小鱼"));
    assert_eq!(options.temperature, Some(1.2));
    assert_eq!(options.top_p, Some(0.9));
}

/// Any reply the strict parser cannot accept is a parse failure; the
/// workflow must never return 0, 1, 2 or more than 3 entries.
#[tokio::test]
async fn interpret_name_rejects_unparseable_reply() {
    for reply in [
        "好的，我来帮你拆解这个名字！",
        r#"[{"id": 1, "imagery1": "a", "imagery2": "b"}]"#,
        r#"[
            {"id": 1, "imagery1": "a", "imagery2": "b"},
            {"id": 2, "imagery1": "c", "imagery2": "d"},
            {"id": 3, "imagery1": "e"}
        ]"#,
    ] {
        let service =
            BlindboxService::new(FixedText::new(reply), ScriptedImages::new(vec![]));
        let err = service.interpret_name("孙小鱼").await.unwrap_err();
        assert!(
            matches!(err, BlindboxError::ResponseParse(_)),
            "reply {reply:?} should fail parsing, got {err:?}"
        );
    }
}

/// The image workflow uses fixed internal policy: one 1024x1024 URL.
#[tokio::test]
async fn generate_image_for_pair_uses_internal_policy() {
    let images = ScriptedImages::new(vec![one_url("https://img.example/a.jpg")]);
    let service = BlindboxService::new(FixedText::new(""), images.clone());

    let pair = ImageryPair::new("孙悟空的小猴", "流线型的鱼尾");
    let url = service.generate_image_for_pair(&pair).await.unwrap();
    assert_eq!(url.as_deref(), Some("https://img.example/a.jpg"));

    let prompts = images.prompts.lock().unwrap();
    assert!(prompts[0].contains("'孙悟空的小猴'"));
    assert!(prompts[0].contains("'流线型的鱼尾'"));

    let options = images.options_seen.lock().unwrap();
    assert_eq!(options[0].count, 1);
    assert_eq!(options[0].size, "1024x1024");
}

/// An empty batch is a soft miss, not an error.
#[tokio::test]
async fn generate_image_for_pair_empty_batch_is_none() {
    let images = ScriptedImages::new(vec![ImageScript::Batch(vec![])]);
    let service = BlindboxService::new(FixedText::new(""), images);

    let url = service
        .generate_image_for_pair(&ImageryPair::new("a", "b"))
        .await
        .unwrap();
    assert!(url.is_none());
}

/// Feedback returns the raw reply unprocessed.
#[tokio::test]
async fn generate_feedback_returns_raw_reply() {
    let blurb = "哇！这对组合能量爆棚，运气值88分！";
    let text = FixedText::new(blurb);
    let service = BlindboxService::new(text.clone(), ScriptedImages::new(vec![]));

    let pair = ImageryPair::new("孙悟空的小猴", "流线型的鱼尾");
    let feedback = service.generate_feedback(&pair).await.unwrap();
    assert_eq!(feedback, blurb);
    assert!(!feedback.is_empty());

    let calls = text.calls.lock().unwrap();
    let (messages, options) = &calls[0];
    assert_eq!(messages[0].role, Role::System);
    assert!(messages[0].content.contains("积极心理学"));
    assert_eq!(options.temperature, Some(1.2));
    assert_eq!(options.top_p, Some(0.9));
}

/// The blind box issues exactly one image call per combination,
/// sequentially, and preserves input order in its output.
#[tokio::test]
async fn blindbox_preserves_order_across_three_calls() {
    let images = ScriptedImages::new(vec![
        one_url("https://img.example/1.jpg"),
        one_url("https://img.example/2.jpg"),
        one_url("https://img.example/3.jpg"),
    ]);
    let service = BlindboxService::new(FixedText::new(VALID_REPLY), images.clone());

    let blindbox = service.generate_name_blindbox("孙小鱼").await.unwrap();

    assert_eq!(blindbox.len(), 3);
    assert_eq!(images.prompts.lock().unwrap().len(), 3);
    let ids: Vec<u32> = blindbox.iter().map(|item| item.id).collect();
    assert_eq!(ids, [1, 2, 3]);
    assert_eq!(blindbox[0].image_url, "https://img.example/1.jpg");
    assert_eq!(blindbox[2].image_url, "https://img.example/3.jpg");
    assert_eq!(blindbox[1].imagery1, "鲜嫩竹笋");
}

/// A combination whose image call returns no URL is silently dropped; the
/// rest of the batch survives in order.
#[tokio::test]
async fn blindbox_drops_combination_without_url() {
    let images = ScriptedImages::new(vec![
        one_url("https://img.example/1.jpg"),
        ImageScript::Batch(vec![]),
        one_url("https://img.example/3.jpg"),
    ]);
    let service = BlindboxService::new(FixedText::new(VALID_REPLY), images);

    let blindbox = service.generate_name_blindbox("孙小鱼").await.unwrap();

    let ids: Vec<u32> = blindbox.iter().map(|item| item.id).collect();
    assert_eq!(ids, [1, 3]);
}

/// A hard failure from any image call aborts the whole batch.
#[tokio::test]
async fn blindbox_aborts_on_hard_image_failure() {
    let images = ScriptedImages::new(vec![
        one_url("https://img.example/1.jpg"),
        ImageScript::RateLimited,
    ]);
    let service = BlindboxService::new(FixedText::new(VALID_REPLY), images.clone());

    let err = service.generate_name_blindbox("孙小鱼").await.unwrap_err();
    assert!(matches!(err, BlindboxError::RateLimited { .. }));
    // The third call never happened.
    assert_eq!(images.prompts.lock().unwrap().len(), 2);
}

/// Interpretation failure aborts before any image call.
#[tokio::test]
async fn blindbox_aborts_on_interpretation_failure() {
    let images = ScriptedImages::new(vec![]);
    let service = BlindboxService::new(FixedText::new("not json"), images.clone());

    let err = service.generate_name_blindbox("孙小鱼").await.unwrap_err();
    assert!(matches!(err, BlindboxError::ResponseParse(_)));
    assert!(images.prompts.lock().unwrap().is_empty());
}
