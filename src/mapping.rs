//! Per-page overrides for plugin registrations.
//!
//! Modules ship with a default selector and default options. A page that needs
//! different markup hooks or settings installs a [`ModuleMapping`] on its registry
//! instead of editing the modules themselves:
//!
//! ```toml
//! [expandable]
//! selector = ".js-expandable"
//!
//! [expandable.options]
//! duration = 200
//! ```

use std::collections::HashMap ;
use pipe_trait::Pipe ;
use serde::Deserialize ;
use thiserror::Error ;

use crate::Options ;
use crate::options::merge ;



/// Failure to read a module mapping.
#[derive( Error, Debug )]
pub enum MappingError {
	/// The mapping source isn't valid TOML or doesn't have the expected shape.
	#[error( "Invalid module mapping: {0}" )] Toml( #[from] toml::de::Error ),
}

/// Overrides for a single module.
#[derive( Debug, Clone, Default, PartialEq, Deserialize )]
#[serde( deny_unknown_fields )]
pub struct MappingEntry {
	/// Replaces the registered selector
	#[serde( default )]
	pub selector: Option<String>,
	/// Merged over the registered options
	#[serde( default )]
	pub options: Option<Options>,
}

/// Selector and option overrides keyed by module name.
///
/// Only plugin registrations are affected; initializers have no selector and no
/// per-element options.
///
/// ```
/// use module_controller::ModuleMapping ;
///
/// let mapping = ModuleMapping::from_toml_str( r#"
/// 	[slider]
/// 	selector = ".carousel"
/// "# ).unwrap();
///
/// assert_eq!( mapping.get( "slider" ).and_then(| entry | entry.selector.as_deref() ), Some( ".carousel" ));
/// ```
#[derive( Debug, Clone, Default, PartialEq, Deserialize )]
#[serde( transparent )]
pub struct ModuleMapping {
	entries: HashMap<String, MappingEntry>,
}

impl ModuleMapping {

	/// Creates an empty mapping.
	pub fn new() -> Self { Self::default() }

	/// Parses a mapping from TOML, one table per module name.
	///
	/// # Errors
	/// Returns [`MappingError::Toml`] when the source is malformed or contains
	/// unknown keys.
	pub fn from_toml_str( source: &str ) -> Result<Self, MappingError> {
		source.pipe( toml::from_str ).map_err( MappingError::from )
	}

	/// Adds or replaces the overrides for `name`.
	pub fn insert( &mut self, name: impl Into<String>, entry: MappingEntry ) -> &mut Self {
		self.entries.insert( name.into(), entry );
		self
	}

	/// The overrides for `name`, if any.
	#[inline] pub fn get( &self, name: &str ) -> Option<&MappingEntry> { self.entries.get( name ) }

	#[inline] pub fn len( &self ) -> usize { self.entries.len() }

	#[inline] pub fn is_empty( &self ) -> bool { self.entries.is_empty() }

	/// Applies the overrides for `name` to a plugin's selector and options.
	pub(crate) fn apply( &self, name: &str, selector: String, options: Options ) -> ( String, Options ) {
		match self.entries.get( name ) {
			None => ( selector, options ),
			Some( entry ) => (
				entry.selector.clone().unwrap_or( selector ),
				match &entry.options {
					Some( overrides ) => merge( options, overrides.clone() ),
					None => options,
				},
			),
		}
	}

}
