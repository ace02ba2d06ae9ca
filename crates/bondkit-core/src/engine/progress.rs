/// Progress events emitted while a workflow runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    FramesStart { total: u64 },
    FrameEvaluated { index: usize },
    FramesFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// A reporter without a callback drops every event, so library code can
/// report unconditionally.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));

        reporter.report(Progress::FramesStart { total: 2 });
        reporter.report(Progress::FrameEvaluated { index: 0 });
        reporter.report(Progress::FramesFinish);
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::FramesStart { total: 2 },
                Progress::FrameEvaluated { index: 0 },
                Progress::FramesFinish,
            ]
        );
    }
}
