/// Receives failure messages from shader and program setup.
///
/// Any `FnMut(&str)` closure is a sink, which is how callers route
/// diagnostics into their own UI or test assertions.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

impl<F: FnMut(&str)> DiagnosticSink for F {
    fn report(&mut self, message: &str) {
        self(message)
    }
}

/// Default sink: `console.error` in the browser, stderr on the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&message.into());

        #[cfg(not(target_arch = "wasm32"))]
        eprintln!("{message}");
    }
}
