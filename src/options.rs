//! Module configuration values.
//!
//! Options are opaque to the controller. They are carried on each descriptor and
//! handed to a plugin's construction routine untouched.

/// Configuration value handed to a module when it is constructed.
pub type Options = serde_json::Value ;



/// Shallow-merges `overrides` on top of `defaults`.
///
/// Object keys present in `overrides` replace the ones in `defaults`. A `Null`
/// override keeps the defaults, any other non-object override replaces them whole.
pub(crate) fn merge( defaults: Options, overrides: Options ) -> Options {
	match ( defaults, overrides ) {
		( defaults, Options::Null ) => defaults,
		( Options::Object( mut base ), Options::Object( layer )) => {
			base.extend( layer );
			Options::Object( base )
		},
		( _, overrides ) => overrides,
	}
}
