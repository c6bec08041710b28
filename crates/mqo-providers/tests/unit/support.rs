//! Test doubles shared by the provider tests

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mqo_providers::Error;
use mqo_providers::Result;
use mqo_providers::embedding::OllamaClient;

/// Blocking client double that embeds a prompt as `[len, first char, 1.0, ...]`
///
/// Records every call, tracks how many calls run at the same time and can be
/// told to fail or stall on specific prompts.
pub struct ScriptedClient {
    dimensions: usize,
    fail_on: Option<String>,
    empty_on: Option<String>,
    delay: Box<dyn Fn(&str) -> Duration + Send + Sync>,
    calls: Mutex<Vec<(String, String)>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(2),
            fail_on: None,
            empty_on: None,
            delay: Box::new(|_| Duration::ZERO),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, prompt: &str) -> Self {
        self.fail_on = Some(prompt.to_string());
        self
    }

    pub fn empty_on(mut self, prompt: &str) -> Self {
        self.empty_on = Some(prompt.to_string());
        self
    }

    pub fn with_delay(mut self, delay: impl Fn(&str) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Prompts seen so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }

    /// Models seen so far, in call order
    pub fn models(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls lock")
            .iter()
            .map(|(model, _)| model.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }

    /// Highest number of calls observed running at once
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    /// Vector this client produces for `prompt`
    pub fn expected(&self, prompt: &str) -> Vec<f32> {
        let mut vector = vec![1.0; self.dimensions];
        vector[0] = prompt.len() as f32;
        vector[1] = prompt.chars().next().map_or(0.0, |c| c as u32 as f32);
        vector
    }
}

impl OllamaClient for ScriptedClient {
    fn embeddings(&self, model: &str, prompt: &str) -> Result<Vec<f32>> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((model.to_string(), prompt.to_string()));

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep((self.delay)(prompt));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_on.as_deref() == Some(prompt) {
            return Err(Error::backend_with_source(
                "Ollama HTTP request failed",
                io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"),
            ));
        }
        if self.empty_on.as_deref() == Some(prompt) {
            return Ok(Vec::new());
        }
        Ok(self.expected(prompt))
    }
}

/// In-memory log sink for asserting on emitted tracing events
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer lock")).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
