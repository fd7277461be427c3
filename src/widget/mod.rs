//! The flashcard widget: a create form and an append-only list, backed by the API.
//!
//! Requests run as tasks on a tokio runtime and report back through a channel.
//! Their results are applied on the thread that owns the widget, during
//! [`FlashcardWidget::poll`] or [`FlashcardWidget::settle`], so the list is
//! only touched from one place.

pub mod handlers;
pub mod list;

pub use list::{CardList, RenderedList};

use crate::api::FlashcardApi;
use crate::error::ApiResult;
use crate::models::{CardItem, FlashcardForm, ListedFlashcard};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Called from a request task after its result is queued, to wake the host.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Outcome of a finished request.
#[derive(Debug)]
pub enum WidgetEvent {
    Created(ApiResult<Value>),
    Loaded(ApiResult<Vec<ListedFlashcard>>),
}

pub struct FlashcardWidget<L: CardList> {
    pub form: FlashcardForm,
    list: L,
    api: Arc<dyn FlashcardApi>,
    runtime: Handle,
    notify: Notify,
    events_tx: UnboundedSender<WidgetEvent>,
    events_rx: UnboundedReceiver<WidgetEvent>,
    in_flight: usize,
}

impl<L: CardList> FlashcardWidget<L> {
    /// Binds the widget to its form and list and starts loading the existing flashcards.
    pub fn init(
        form: FlashcardForm,
        list: L,
        api: Arc<dyn FlashcardApi>,
        runtime: Handle,
        notify: Notify,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut widget = Self {
            form,
            list,
            api,
            runtime,
            notify,
            events_tx,
            events_rx,
            in_flight: 0,
        };
        widget.load();
        widget
    }

    fn load(&mut self) {
        let api = Arc::clone(&self.api);
        self.spawn(async move { WidgetEvent::Loaded(api.list().await) });
    }

    /// Handles a form submission.
    ///
    /// Invalid input (any field blank after trimming) is dropped silently and
    /// returns `false`. Otherwise the card is rendered right away, the inputs are
    /// cleared and the create request is sent in the background.
    pub fn submit(&mut self) -> bool {
        let Some(card) = self.form.to_flashcard() else {
            return false;
        };

        self.list.append(CardItem::from(&card));
        self.form.clear();

        log::debug!("Submitting flashcard to deck '{}'", card.deck_id);
        let api = Arc::clone(&self.api);
        self.spawn(async move { WidgetEvent::Created(api.create(&card).await) });
        true
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = WidgetEvent> + Send + 'static,
    {
        let events = self.events_tx.clone();
        let notify = Arc::clone(&self.notify);
        self.in_flight += 1;

        self.runtime.spawn(async move {
            // receiver lives as long as the widget
            let _ = events.send(request.await);
            notify();
        });
    }

    /// Applies every result that has already arrived. Never blocks.
    /// Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Waits for every outstanding request and applies its result.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.events_rx.recv().await {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    fn apply(&mut self, event: WidgetEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match event {
            WidgetEvent::Created(result) => handlers::on_created(result),
            WidgetEvent::Loaded(result) => {
                handlers::on_loaded(&mut self.list, result);
            }
        }
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    /// Number of requests sent whose results have not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{FlashcardEdit, NewFlashcard};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockApi {
        stored: Vec<ListedFlashcard>,
        fail_list: bool,
        fail_create: bool,
        created: Mutex<Vec<NewFlashcard>>,
    }

    fn unavailable() -> ApiError {
        ApiError::Status {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[async_trait]
    impl FlashcardApi for MockApi {
        async fn create(&self, card: &NewFlashcard) -> ApiResult<Value> {
            self.created.lock().unwrap().push(card.clone());
            if self.fail_create {
                return Err(unavailable());
            }
            Ok(json!({"ok": true}))
        }

        async fn list(&self) -> ApiResult<Vec<ListedFlashcard>> {
            if self.fail_list {
                return Err(unavailable());
            }
            Ok(self.stored.clone())
        }

        async fn update(&self, _id: i64, _edit: &FlashcardEdit) -> ApiResult<()> {
            Ok(())
        }

        async fn delete(&self, _id: i64) -> ApiResult<()> {
            Ok(())
        }
    }

    fn listed(question: &str, answer: &str) -> ListedFlashcard {
        ListedFlashcard {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    fn widget(api: Arc<MockApi>) -> FlashcardWidget<RenderedList> {
        FlashcardWidget::init(
            FlashcardForm::default(),
            RenderedList::default(),
            api,
            Handle::current(),
            Arc::new(|| {}),
        )
    }

    fn fill(form: &mut FlashcardForm, deck_id: &str, question: &str, answer: &str) {
        form.deck_id = deck_id.to_string();
        form.question = question.to_string();
        form.answer = answer.to_string();
    }

    #[tokio::test]
    async fn test_submit_renders_clears_and_posts() {
        let api = Arc::new(MockApi::default());
        let mut widget = widget(Arc::clone(&api));
        widget.settle().await;

        fill(&mut widget.form, "d1", "2+2?", "4");
        assert!(widget.submit());

        assert_eq!(widget.list().len(), 1);
        assert_eq!(widget.list().items()[0].question, "2+2?");
        assert_eq!(widget.list().items()[0].answer, "4");
        assert_eq!(widget.form, FlashcardForm::default());

        widget.settle().await;
        let created = api.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(
            serde_json::to_value(&created[0]).unwrap(),
            json!({"deckId": "d1", "question": "2+2?", "answer": "4"})
        );
    }

    #[tokio::test]
    async fn test_submit_trims_fields() {
        let api = Arc::new(MockApi::default());
        let mut widget = widget(Arc::clone(&api));

        fill(&mut widget.form, " d1 ", "  What is the capital of France? ", " Paris\n");
        assert!(widget.submit());
        widget.settle().await;

        assert_eq!(widget.list().items()[0].question, "What is the capital of France?");
        assert_eq!(widget.list().items()[0].answer, "Paris");
        assert_eq!(api.created.lock().unwrap()[0].deck_id, "d1");
    }

    #[tokio::test]
    async fn test_blank_field_is_ignored() {
        let api = Arc::new(MockApi::default());
        let mut widget = widget(Arc::clone(&api));
        widget.settle().await;

        for (deck_id, question, answer) in [("", "q", "a"), ("d", "  ", "a"), ("d", "q", "\t")] {
            fill(&mut widget.form, deck_id, question, answer);
            assert!(!widget.submit());

            assert!(widget.list().is_empty());
            assert_eq!(widget.form.deck_id, deck_id);
            assert_eq!(widget.form.question, question);
            assert_eq!(widget.form.answer, answer);
            assert_eq!(widget.in_flight(), 0);
        }
        assert!(api.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initial_load_renders_in_order() {
        let api = Arc::new(MockApi {
            stored: vec![
                listed("Capital of France?", "Paris"),
                listed("cześć", "hello"),
                listed("proszę", "please"),
            ],
            ..Default::default()
        });
        let mut widget = widget(api);
        assert_eq!(widget.in_flight(), 1);

        widget.settle().await;

        let questions: Vec<&str> = widget
            .list()
            .items()
            .iter()
            .map(|item| item.question.as_str())
            .collect();
        assert_eq!(questions, ["Capital of France?", "cześć", "proszę"]);
        assert_eq!(widget.list().items()[0].answer, "Paris");
    }

    #[tokio::test]
    async fn test_failed_load_leaves_list_empty() {
        let api = Arc::new(MockApi {
            fail_list: true,
            ..Default::default()
        });
        let mut widget = widget(api);
        widget.settle().await;

        assert!(widget.list().is_empty());
        assert_eq!(widget.in_flight(), 0);

        // still usable afterwards
        fill(&mut widget.form, "d1", "2+2?", "4");
        assert!(widget.submit());
        assert_eq!(widget.list().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_create_keeps_optimistic_item() {
        let api = Arc::new(MockApi {
            fail_create: true,
            ..Default::default()
        });
        let mut widget = widget(api);

        fill(&mut widget.form, "d1", "2+2?", "4");
        assert!(widget.submit());
        widget.settle().await;

        assert_eq!(widget.list().len(), 1);
        assert_eq!(widget.list().items()[0].question, "2+2?");
    }

    #[tokio::test]
    async fn test_submitted_card_is_not_deduplicated_against_load() {
        let api = Arc::new(MockApi {
            stored: vec![listed("2+2?", "4")],
            ..Default::default()
        });
        let mut widget = widget(api);

        // submitted before the load result is applied
        fill(&mut widget.form, "d1", "2+2?", "4");
        assert!(widget.submit());
        widget.settle().await;

        assert_eq!(widget.list().len(), 2);
        assert_eq!(widget.list().items()[0], widget.list().items()[1]);
    }

    #[tokio::test]
    async fn test_poll_applies_ready_events_and_notifies() {
        let api = Arc::new(MockApi {
            stored: vec![listed("Capital of France?", "Paris")],
            ..Default::default()
        });
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);
        let mut widget = FlashcardWidget::init(
            FlashcardForm::default(),
            RenderedList::default(),
            api,
            Handle::current(),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        fill(&mut widget.form, "d1", "2+2?", "4");
        widget.submit();
        assert_eq!(widget.in_flight(), 2);

        let mut applied = 0;
        while widget.in_flight() > 0 {
            tokio::task::yield_now().await;
            applied += widget.poll();
        }

        assert_eq!(applied, 2);
        assert_eq!(notified.load(Ordering::SeqCst), 2);
        assert_eq!(widget.list().len(), 2);
        assert_eq!(widget.poll(), 0);
    }
}
