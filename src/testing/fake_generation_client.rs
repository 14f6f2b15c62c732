use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::GenerationClient;

#[derive(Clone)]
enum Script {
    Respond(String),
    Fail(String),
}

/// Records prompts and answers with a scripted reply.
#[derive(Clone)]
pub struct FakeGenerationClient {
    script: Script,
    received_prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerationClient {
    pub fn responding(text: impl Into<String>) -> Self {
        Self { script: Script::Respond(text.into()), received_prompts: Arc::default() }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { script: Script::Fail(message.into()), received_prompts: Arc::default() }
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received_prompts.lock().unwrap().len()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.received_prompts.lock().unwrap().push(prompt.to_string());
        match &self.script {
            Script::Respond(text) => Ok(text.clone()),
            Script::Fail(message) => Err(AppError::generation_failed(message.clone())),
        }
    }
}
