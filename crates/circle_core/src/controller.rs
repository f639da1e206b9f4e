//! Controller: the sole mutator of the model, fanning change notifications
//! out to registered observers.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;
use tracing::{debug, warn};

use crate::model::CircleModel;

/// Error an observer may report while rebuilding its display state.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("view failed to apply model change: {0}")]
    Render(String),
}

/// Implemented by every view that tracks the model.
///
/// Observers are shared between the controller and the window shell, so they
/// live behind `Rc<RefCell<…>>`; the whole loop is single-threaded.
pub trait ModelObserver {
    fn on_model_changed(&mut self, model: &CircleModel) -> Result<(), ViewError>;
}

pub struct Controller {
    model: CircleModel,
    observers: Vec<Rc<RefCell<dyn ModelObserver>>>,
}

impl Controller {
    pub fn new(model: CircleModel) -> Self {
        Self {
            model,
            observers: Vec::new(),
        }
    }

    pub fn model(&self) -> &CircleModel {
        &self.model
    }

    /// Appends to the notification list. Order of registration is the order
    /// of notification; duplicates are kept.
    pub fn add_observer(&mut self, observer: Rc<RefCell<dyn ModelObserver>>) {
        self.observers.push(observer);
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.model.set_radius(radius);
        debug!(radius, "radius updated");
        self.notify();
    }

    /// Synchronously notifies every observer on the calling thread. A
    /// failing observer is logged and skipped; the rest are still notified.
    pub fn notify(&self) {
        for observer in &self.observers {
            if let Err(err) = observer.borrow_mut().on_model_changed(&self.model) {
                warn!(error = %err, "observer failed to apply model change");
            }
        }
    }
}
