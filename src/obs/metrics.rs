// self
use crate::obs::RedirectOutcome;

/// Records a classification outcome via the global metrics recorder (when enabled).
pub fn record_redirect_outcome(outcome: RedirectOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("oauth2_interactive_redirect_total", "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
