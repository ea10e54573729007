// self
use crate::_prelude::*;

/// A span builder wrapping classification call sites.
#[derive(Clone, Debug)]
pub struct ClassifySpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ClassifySpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("oauth2_interactive.classify", stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for the synchronous classification section.
	pub fn entered(self) -> ClassifySpanGuard {
		#[cfg(feature = "tracing")]
		{
			ClassifySpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ClassifySpanGuard {}
		}
	}
}

/// RAII guard returned by [`ClassifySpan::entered`].
pub struct ClassifySpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ClassifySpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ClassifySpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn classify_span_noop_without_tracing() {
		let _guard = ClassifySpan::new("test").entered();
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}
}
