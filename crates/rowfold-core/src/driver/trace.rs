use crate::{
    error::ExtractError,
    extract::{Extractor, ExtractorKind},
    obs::{DriverMode, ExtractTraceEvent, ExtractTraceSink},
};

///
/// TraceScope
///
/// Emits `Start` on creation and exactly one `Finish` or `Error` on close.
/// A scope without a sink is inert.
///

pub(super) struct TraceScope<'a> {
    sink: Option<&'a dyn ExtractTraceSink>,
    mode: DriverMode,
    kind: ExtractorKind,
}

impl<'a> TraceScope<'a> {
    pub(super) fn start<E: Extractor>(
        sink: Option<&'a dyn ExtractTraceSink>,
        mode: DriverMode,
        extractor: &E,
    ) -> Self {
        let kind = extractor.kind();
        if let Some(sink) = sink {
            sink.on_event(ExtractTraceEvent::Start {
                mode,
                kind,
                cardinality: E::CARDINALITY,
            });
        }

        Self { sink, mode, kind }
    }

    pub(super) fn close<T>(
        self,
        result: &Result<T, ExtractError>,
        rows: u64,
        results: impl FnOnce(&T) -> usize,
    ) {
        let Some(sink) = self.sink else {
            return;
        };

        let event = match result {
            Ok(value) => ExtractTraceEvent::Finish {
                mode: self.mode,
                kind: self.kind,
                rows,
                results: u64::try_from(results(value)).unwrap_or(u64::MAX),
            },
            Err(err) => ExtractTraceEvent::Error {
                mode: self.mode,
                kind: self.kind,
                rows,
                class: err.class(),
            },
        };
        sink.on_event(event);
    }
}
