//! Process abstraction.
//!
//! A process runs an ordered list of stages over a buffer. Each stage is
//! asked `needs_apply` first, so a clean buffer travels the whole chain
//! without a single allocation.
use crate::{context::Context, stage::Stage};
use log::trace;
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

#[derive(Default, Clone)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl std::fmt::Debug for DynamicProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.stages.iter().map(|s| s.name()))
            .finish()
    }
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Process for DynamicProcess {
    fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx) {
                continue;
            }
            trace!("stage {} rewrites the text", stage.name());
            text = stage.apply(text, ctx);
        }
        text
    }
}
