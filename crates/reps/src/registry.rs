//! Rep registry and selector.

use crate::capability::Capability;
use crate::context::RenderCx;
use crate::error::RepError;
use crate::mode::Mode;
use crate::reps::{self, FallbackRep};
use grip::Grip;
use indextree::NodeId;
use log::{debug, warn};
use once_cell::sync::Lazy;

/// A formatter for one value shape.
///
/// Implementations are stateless: the same grip, mode and hooks always
/// produce the same tree.
pub trait Rep: Send + Sync {
    /// Stable name used for logging and selection checks.
    fn name(&self) -> &'static str;

    /// Whether this rep renders `grip`.
    ///
    /// # Errors
    /// An error means the rep could not decide; the selector treats it as a
    /// non-match and moves on.
    fn supports(&self, grip: &Grip) -> Result<bool, RepError>;

    /// Affordances this rep may attach.
    fn capabilities(&self) -> &'static [Capability] {
        &[]
    }

    /// Render `grip` into a detached node of `cx`'s tree.
    fn render(&self, grip: &Grip, mode: Mode, cx: &mut RenderCx<'_>) -> NodeId;
}

/// Ordered list of reps. The first rep whose predicate accepts a grip wins.
pub struct RepRegistry {
    reps: Vec<Box<dyn Rep>>,
    fallback: FallbackRep,
}

impl RepRegistry {
    /// Start a registry with no reps beyond the fallback.
    #[inline]
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { reps: Vec::new() }
    }

    /// The registry with every built-in rep, most specific first.
    #[must_use]
    pub fn with_default_reps() -> Self {
        reps::default_reps()
            .into_iter()
            .fold(Self::builder(), RegistryBuilder::register_boxed)
            .build()
    }

    /// Select the rep responsible for `grip`. Never fails: the fallback rep
    /// accepts every grip.
    pub fn select(&self, grip: &Grip) -> &dyn Rep {
        for rep in &self.reps {
            match rep.supports(grip) {
                Ok(true) => {
                    debug!("selected {} for {}", rep.name(), grip.type_label());
                    return rep.as_ref();
                }
                Ok(false) => {}
                Err(err) => warn!("skipping {}: {err}", rep.name()),
            }
        }
        debug!("no specific rep for {}, using fallback", grip.type_label());
        &self.fallback
    }

    /// Names of the registered reps in priority order, fallback last.
    pub fn names(&self) -> Vec<&'static str> {
        self.reps
            .iter()
            .map(|rep| rep.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }
}

/// Builder for [`RepRegistry`]. Registration order is priority order.
pub struct RegistryBuilder {
    reps: Vec<Box<dyn Rep>>,
}

impl RegistryBuilder {
    #[inline]
    #[must_use]
    pub fn register<R: Rep + 'static>(self, rep: R) -> Self {
        self.register_boxed(Box::new(rep))
    }

    #[inline]
    #[must_use]
    pub fn register_boxed(mut self, rep: Box<dyn Rep>) -> Self {
        self.reps.push(rep);
        self
    }

    /// Finish the registry; the fallback rep is always appended last.
    #[must_use]
    pub fn build(self) -> RepRegistry {
        RepRegistry {
            reps: self.reps,
            fallback: FallbackRep,
        }
    }
}

/// Process-wide registry, built on first use and read-only afterwards.
pub static REGISTRY: Lazy<RepRegistry> = Lazy::new(RepRegistry::with_default_reps);

/// Select the rep for `grip` from the process-wide registry.
#[inline]
pub fn get_rep(grip: &Grip) -> &'static dyn Rep {
    REGISTRY.select(grip)
}
