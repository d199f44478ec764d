// Runs fetch futures off the UI thread and hands back a promise the UI polls each frame.

use std::future::Future;

use anyhow::Result;
use eframe::egui::Context;
use poll_promise::Promise;

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context as _, std::sync::Arc, tokio::runtime::Runtime};

#[derive(Clone)]
pub struct FetchSpawner {
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<Runtime>,
    /// Woken when a fetch lands so the result shows without user input.
    repaint: Option<Context>,
}

impl FetchSpawner {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(repaint: Option<Context>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("coin-fetch")
            .enable_all()
            .build()
            .context("failed to create fetch runtime")?;
        Ok(Self {
            runtime: Arc::new(runtime),
            repaint,
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(repaint: Option<Context>) -> Result<Self> {
        Ok(Self { repaint })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn<T, F>(&self, task: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let (sender, promise) = Promise::new();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            sender.send(task.await);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        promise
    }

    #[cfg(target_arch = "wasm32")]
    pub fn spawn<T, F>(&self, task: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + 'static,
    {
        let (sender, promise) = Promise::new();
        let repaint = self.repaint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            sender.send(task.await);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        promise
    }
}
