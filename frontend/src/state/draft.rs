//! The draft being edited: a description plus up to [`MAX_IMAGES`] images.
//!
//! Each image is stored together with its preview handle, so the image list
//! and the preview list cannot drift apart. Preview references are external
//! resources (object URLs in the browser) created and released through a
//! [`PreviewStore`].

use crate::config::MAX_IMAGES;
use crate::types::{AppError, AppResult, IntakeError, Notifier, Toast};

/// Creates and releases locally resolvable preview references.
pub trait PreviewStore {
    /// File handle type accepted by the store.
    type File;

    /// Create a preview reference (a URL usable as an `<img src>`).
    fn create(&self, file: &Self::File) -> Result<String, IntakeError>;

    /// Release a reference previously returned by [`PreviewStore::create`].
    fn release(&self, url: &str);
}

/// An outstanding preview reference.
///
/// Not `Clone`: releasing consumes the handle, so each reference is
/// released at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle {
    url: String,
}

impl PreviewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }

    fn release<S: PreviewStore>(self, store: &S) {
        store.release(&self.url);
    }
}

/// An attached image and its preview.
#[derive(Debug)]
pub struct DraftImage<F> {
    pub file: F,
    pub preview: PreviewHandle,
}

/// Form state of the generator.
pub struct Draft<S: PreviewStore> {
    store: S,
    pub description: String,
    images: Vec<DraftImage<S::File>>,
}

impl<S: PreviewStore> Draft<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            description: String::new(),
            images: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether another image slot is available.
    pub fn can_add_more(&self) -> bool {
        self.images.len() < MAX_IMAGES
    }

    pub fn images(&self) -> &[DraftImage<S::File>] {
        &self.images
    }

    /// Preview URLs, index-aligned with [`Draft::images`].
    pub fn preview_urls(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|image| image.preview.url().to_string())
            .collect()
    }

    /// Attach a batch of newly selected files.
    ///
    /// The batch is all-or-nothing: if the total would exceed
    /// [`MAX_IMAGES`], or a preview cannot be created, the draft is left
    /// untouched. Duplicates are kept as independent entries.
    /// Returns the number of images added.
    pub fn add_batch(&mut self, files: Vec<S::File>) -> Result<usize, IntakeError> {
        let current = self.images.len();
        let selected = files.len();
        if current + selected > MAX_IMAGES {
            return Err(IntakeError::TooManyImages {
                current,
                selected,
                max: MAX_IMAGES,
            });
        }

        let mut accepted = Vec::with_capacity(selected);
        for file in files {
            match self.store.create(&file) {
                Ok(url) => accepted.push(DraftImage {
                    file,
                    preview: PreviewHandle { url },
                }),
                Err(err) => {
                    for image in accepted {
                        image.preview.release(&self.store);
                    }
                    return Err(err);
                }
            }
        }

        self.images.extend(accepted);
        Ok(selected)
    }

    /// Detach the image at `index`, releasing its preview immediately.
    ///
    /// Later images shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<S::File, IntakeError> {
        if index >= self.images.len() {
            return Err(IntakeError::InvalidIndex {
                index,
                len: self.images.len(),
            });
        }
        let DraftImage { file, preview } = self.images.remove(index);
        preview.release(&self.store);
        Ok(file)
    }

    /// Release every outstanding preview and drop the images.
    ///
    /// The description is kept.
    pub fn release_all(&mut self) {
        for image in self.images.drain(..) {
            image.preview.release(&self.store);
        }
    }
}

impl<S: PreviewStore> Draft<S>
where
    S::File: Clone,
{
    /// Files in selection order, for building a submission.
    pub fn files(&self) -> Vec<S::File> {
        self.images.iter().map(|image| image.file.clone()).collect()
    }
}

impl<S: PreviewStore> Drop for Draft<S> {
    fn drop(&mut self) {
        self.release_all();
    }
}

/// Attach a file selection and tell the user when it is refused.
///
/// A batch over the cap raises the "Too many images" warning; a preview
/// failure raises a generic one. Accepted batches are silent.
pub fn intake<S: PreviewStore>(
    draft: &mut Draft<S>,
    files: Vec<S::File>,
    notifier: &impl Notifier,
) -> AppResult<usize> {
    match draft.add_batch(files) {
        Ok(added) => {
            if added > 0 {
                log::info!("🖼️ Attached {} image(s)", added);
            }
            Ok(added)
        }
        Err(err @ IntakeError::TooManyImages { .. }) => {
            log::warn!("{}", err);
            notifier.notify(Toast::too_many_images());
            Err(AppError::from(err))
        }
        Err(err) => {
            log::error!("❌ {}", err);
            notifier.notify(Toast::destructive("Image preview failed", err.to_string()));
            Err(AppError::from(err))
        }
    }
}

/// Help text under the image picker.
pub fn upload_hint(count: usize) -> String {
    let base = format!(
        "Upload up to {} images to enhance your AI-generated content.",
        MAX_IMAGES
    );
    if count > 0 {
        format!("{} ({}/{} uploaded)", base, count, MAX_IMAGES)
    } else {
        format!("{} Images will be analyzed for better ad recommendations.", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToastVariant;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store that hands out numbered URLs and records releases.
    #[derive(Clone, Default)]
    struct RecordingStore {
        created: Rc<RefCell<usize>>,
        released: Rc<RefCell<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl PreviewStore for RecordingStore {
        type File = &'static str;

        fn create(&self, file: &&'static str) -> Result<String, IntakeError> {
            if self.fail_on == Some(*file) {
                return Err(IntakeError::Preview(format!("cannot preview {}", file)));
            }
            let mut created = self.created.borrow_mut();
            *created += 1;
            Ok(format!("blob:{}#{}", file, created))
        }

        fn release(&self, url: &str) {
            self.released.borrow_mut().push(url.to_string());
        }
    }

    fn draft_with(store: &RecordingStore, files: &[&'static str]) -> Draft<RecordingStore> {
        let mut draft = Draft::new(store.clone());
        draft.add_batch(files.to_vec()).unwrap();
        draft
    }

    #[test]
    fn test_add_batch_keeps_previews_aligned() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png", "b.png"]);

        assert_eq!(draft.add_batch(vec!["c.png"]), Ok(1));
        assert_eq!(draft.len(), 3);
        assert_eq!(draft.preview_urls().len(), draft.len());
        for image in draft.images() {
            assert!(image.preview.url().starts_with(&format!("blob:{}", image.file)));
        }
        assert_eq!(draft.files(), vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_add_batch_up_to_limit() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png", "b.png", "c.png"]);

        assert_eq!(draft.add_batch(vec!["d.png", "e.png"]), Ok(2));
        assert_eq!(draft.len(), MAX_IMAGES);
        assert!(!draft.can_add_more());
    }

    #[test]
    fn test_add_batch_over_limit_rejects_whole_batch() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png", "b.png", "c.png", "d.png"]);
        let before = draft.preview_urls();

        let result = draft.add_batch(vec!["e.png", "f.png"]);
        assert_eq!(
            result,
            Err(IntakeError::TooManyImages { current: 4, selected: 2, max: 5 })
        );
        assert_eq!(draft.preview_urls(), before);
        assert_eq!(*store.created.borrow(), 4);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png"]);
        assert_eq!(draft.add_batch(Vec::new()), Ok(0));
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn test_duplicates_are_independent_entries() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png", "a.png"]);
        assert_eq!(draft.len(), 2);

        let urls = draft.preview_urls();
        assert_ne!(urls[0], urls[1]);

        draft.remove(0).unwrap();
        assert_eq!(draft.files(), vec!["a.png"]);
        assert_eq!(*store.released.borrow(), vec![urls[0].clone()]);
    }

    #[test]
    fn test_failed_preview_rolls_back_batch() {
        let store = RecordingStore {
            fail_on: Some("broken.png"),
            ..Default::default()
        };
        let mut draft = Draft::new(store.clone());

        let result = draft.add_batch(vec!["a.png", "b.png", "broken.png"]);
        assert!(matches!(result, Err(IntakeError::Preview(_))));
        assert!(draft.is_empty());
        assert_eq!(store.released.borrow().len(), 2);
    }

    #[test]
    fn test_remove_shifts_and_releases_once() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png", "b.png", "c.png"]);
        let urls = draft.preview_urls();

        assert_eq!(draft.remove(1), Ok("b.png"));
        assert_eq!(draft.files(), vec!["a.png", "c.png"]);
        assert_eq!(draft.preview_urls(), vec![urls[0].clone(), urls[2].clone()]);
        assert_eq!(*store.released.borrow(), vec![urls[1].clone()]);
    }

    #[test]
    fn test_remove_invalid_index() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png"]);

        assert_eq!(draft.remove(3), Err(IntakeError::InvalidIndex { index: 3, len: 1 }));
        assert_eq!(draft.len(), 1);
        assert!(store.released.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_outstanding_previews_exactly_once() {
        let store = RecordingStore::default();
        {
            let mut draft = draft_with(&store, &["a.png", "b.png", "c.png"]);
            draft.remove(0).unwrap();
            draft.release_all();
            assert!(draft.is_empty());
        }

        let mut released = store.released.borrow().clone();
        assert_eq!(released.len(), 3);
        released.sort();
        released.dedup();
        assert_eq!(released.len(), 3);
    }

    #[test]
    fn test_release_all_keeps_description() {
        let store = RecordingStore::default();
        let mut draft = draft_with(&store, &["a.png"]);
        draft.description = "Handmade mugs".into();
        draft.release_all();
        assert_eq!(draft.description, "Handmade mugs");
    }

    #[test]
    fn test_intake_over_limit_warns_once() {
        let store = RecordingStore::default();
        let notifier: RefCell<Vec<Toast>> = RefCell::default();
        let mut draft = draft_with(&store, &["a.png", "b.png", "c.png"]);
        let before = draft.preview_urls();

        let result = intake(&mut draft, vec!["d.png", "e.png", "f.png"], &notifier);
        assert!(matches!(
            result,
            Err(AppError::Intake(IntakeError::TooManyImages { current: 3, selected: 3, max: 5 }))
        ));
        assert_eq!(draft.files(), vec!["a.png", "b.png", "c.png"]);
        assert_eq!(draft.preview_urls(), before);

        let toasts = notifier.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0], Toast::too_many_images());
        assert_eq!(toasts[0].variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_intake_valid_batch_is_silent() {
        let store = RecordingStore::default();
        let notifier: RefCell<Vec<Toast>> = RefCell::default();
        let mut draft = Draft::new(store.clone());

        assert_eq!(intake(&mut draft, vec!["a.png", "b.png"], &notifier), Ok(2));
        assert_eq!(intake(&mut draft, Vec::new(), &notifier), Ok(0));
        assert_eq!(draft.len(), 2);
        assert!(notifier.borrow().is_empty());
    }

    #[test]
    fn test_intake_preview_failure_warns() {
        let store = RecordingStore {
            fail_on: Some("broken.png"),
            ..Default::default()
        };
        let notifier: RefCell<Vec<Toast>> = RefCell::default();
        let mut draft = Draft::new(store.clone());

        assert!(intake(&mut draft, vec!["broken.png"], &notifier).is_err());
        assert!(draft.is_empty());
        let toasts = notifier.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Image preview failed");
    }

    #[test]
    fn test_upload_hint() {
        assert!(upload_hint(0).ends_with("Images will be analyzed for better ad recommendations."));
        assert!(upload_hint(2).ends_with("(2/5 uploaded)"));
    }
}
