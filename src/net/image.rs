//! Background image preloader.
//!
//! Fetch + decode jobs run on the rayon pool and report back over a
//! channel; the UI calls `poll()` once per frame. A [`PreloadBatch`] groups
//! the images a reshuffle needs and settles once each of them has either
//! loaded or failed, so a broken image never holds up the carousel.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;
use std::time::{SystemTime, UNIX_EPOCH};

use super::fetch::{fetch_bytes, is_remote};

/// Widest decoded image kept in memory.
const MAX_WIDTH: u32 = 800;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    NotRequested,
    Pending,
    Loaded,
    Failed,
}

/// Manages background image fetching and decoding.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
    cache_bust: bool,
}

impl ImageLoader {
    pub fn new(cache_bust: bool) -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
            cache_bust,
        }
    }

    /// Request an image to be fetched in the background.
    pub fn request(&mut self, source: &str) {
        if self.status(source) != ImageStatus::NotRequested {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let source_owned = source.to_string();
        let stamp = (self.cache_bust && is_remote(source)).then(now_stamp);

        rayon::spawn(move || {
            let result = fetch_and_decode(&source_owned, stamp);
            let _ = tx.send(result);
        });

        self.pending.insert(source.to_string(), rx);
    }

    /// Poll for completed downloads. Call every frame.
    ///
    /// Returns the number of images that finished (either way) this call.
    pub fn poll(&mut self) -> usize {
        let mut completed = Vec::new();
        for (source, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Some(data)) => {
                    log::debug!("Image loaded: {} ({}x{})", source, data.width, data.height);
                    self.loaded.insert(source.clone(), data);
                    completed.push(source.clone());
                }
                Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(source.clone());
                    completed.push(source.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for source in &completed {
            self.pending.remove(source);
        }
        completed.len()
    }

    pub fn status(&self, source: &str) -> ImageStatus {
        if self.loaded.contains_key(source) {
            ImageStatus::Loaded
        } else if self.failed.contains(source) {
            ImageStatus::Failed
        } else if self.pending.contains_key(source) {
            ImageStatus::Pending
        } else {
            ImageStatus::NotRequested
        }
    }

    /// Get a loaded image's data.
    pub fn get(&self, source: &str) -> Option<&ImageData> {
        self.loaded.get(source)
    }

    /// Get all loaded image sources.
    pub fn loaded_sources(&self) -> Vec<String> {
        self.loaded.keys().cloned().collect()
    }

    /// Number of successfully loaded images.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// The set of images one reshuffle waits for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadBatch {
    sources: Vec<String>,
}

impl PreloadBatch {
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources }
    }

    /// Request every image in the batch.
    pub fn start(&self, loader: &mut ImageLoader) {
        for source in &self.sources {
            loader.request(source);
        }
    }

    /// `(settled, total)`
    pub fn progress(&self, loader: &ImageLoader) -> (usize, usize) {
        let settled = self
            .sources
            .iter()
            .filter(|s| matches!(loader.status(s), ImageStatus::Loaded | ImageStatus::Failed))
            .count();
        (settled, self.sources.len())
    }

    /// True once every image has loaded or failed. An empty batch is settled.
    pub fn is_settled(&self, loader: &ImageLoader) -> bool {
        let (settled, total) = self.progress(loader);
        settled == total
    }

    pub fn failed(&self, loader: &ImageLoader) -> usize {
        self.sources
            .iter()
            .filter(|s| loader.status(s) == ImageStatus::Failed)
            .count()
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

fn now_stamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn fetch_and_decode(source: &str, cache_bust: Option<u64>) -> Option<ImageData> {
    let bytes = match fetch_bytes(source, cache_bust) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to load image: {}: {}", source, e);
            return None;
        }
    };
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("Failed to decode image: {}: {}", source, e);
            return None;
        }
    };
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_WIDTH {
        let ratio = MAX_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_WIDTH,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn temp_png(name: &str, width: u32, height: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "prompt-carousel-{}-{}.png",
            std::process::id(),
            name
        ));
        image::RgbaImage::from_pixel(width, height, image::Rgba([200, 180, 255, 255]))
            .save(&path)
            .unwrap();
        path
    }

    fn wait_settled(batch: &PreloadBatch, loader: &mut ImageLoader) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !batch.is_settled(loader) {
            assert!(Instant::now() < deadline, "preload did not settle");
            loader.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn loader_deduplicates() {
        let mut loader = ImageLoader::new(false);
        loader.request("https://example.invalid/img.png");
        loader.request("https://example.invalid/img.png"); // should not duplicate
        assert_eq!(loader.pending.len() + loader.failed.len(), 1);
    }

    #[test]
    fn empty_batch_is_settled() {
        let loader = ImageLoader::new(true);
        let batch = PreloadBatch::default();
        assert!(batch.is_settled(&loader));
        assert_eq!(batch.progress(&loader), (0, 0));
    }

    #[test]
    fn failures_do_not_block_the_batch() {
        let good = temp_png("good", 4, 3);
        let good = good.to_str().unwrap().to_string();
        let missing = "/definitely/not/here/missing.png".to_string();

        let mut loader = ImageLoader::new(true);
        let batch = PreloadBatch::new(vec![good.clone(), missing.clone()]);
        batch.start(&mut loader);
        wait_settled(&batch, &mut loader);

        assert_eq!(loader.status(&good), ImageStatus::Loaded);
        assert_eq!(loader.status(&missing), ImageStatus::Failed);
        assert_eq!(batch.failed(&loader), 1);
        assert_eq!(
            (loader.loaded_count(), loader.pending_count(), loader.failed_count()),
            (1, 0, 1)
        );

        let data = loader.get(&good).unwrap();
        assert_eq!((data.width, data.height), (4, 3));
        assert_eq!(data.rgba.len(), 4 * 3 * 4);
        std::fs::remove_file(good).ok();
    }

    #[test]
    fn wide_images_are_capped() {
        let wide = temp_png("wide", 1600, 10);
        let wide = wide.to_str().unwrap().to_string();

        let mut loader = ImageLoader::new(false);
        let batch = PreloadBatch::new(vec![wide.clone()]);
        batch.start(&mut loader);
        wait_settled(&batch, &mut loader);

        let data = loader.get(&wide).unwrap();
        assert_eq!(data.width, MAX_WIDTH);
        assert_eq!(data.height, 5);
        std::fs::remove_file(wide).ok();
    }

    #[test]
    fn undecodable_file_fails() {
        let path = std::env::temp_dir().join(format!(
            "prompt-carousel-{}-garbage.png",
            std::process::id()
        ));
        std::fs::write(&path, b"not an image").unwrap();
        let source = path.to_str().unwrap().to_string();

        let mut loader = ImageLoader::new(false);
        let batch = PreloadBatch::new(vec![source.clone()]);
        batch.start(&mut loader);
        wait_settled(&batch, &mut loader);
        assert_eq!(loader.status(&source), ImageStatus::Failed);
        std::fs::remove_file(path).ok();
    }
}
