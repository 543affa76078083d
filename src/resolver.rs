//! Dependency-ordered scheduling of a single pass.
//!
//! Modules are walked in registration order. A module whose dependencies have all
//! completed is initialized on the spot; any other module is parked on a wait-list
//! under every dependency it is still missing. Each completion drains the wait-list
//! entry for the completed name, and a parked module initializes as soon as its
//! last missing dependency completes, which may in turn release further modules.
//!
//! Nothing is sorted up front, so a module may depend on one registered after it.
//! Whatever is still parked once the walk settles never initializes during the pass
//! and is reported as an [`UnresolvedDependency`]. Cycles are reported, not broken.

use std::collections::{ BTreeMap, HashSet, VecDeque };
use itertools::Itertools ;
use log::trace ;
use nonempty_collections::NEVec ;

use crate::{ ModuleDescriptor, PassError };
use crate::registry::is_registered ;
use crate::utils::PartialSuccess ;



/// Why a dependency never completed.
#[derive( Copy, Clone, Eq, PartialEq, Hash, Debug )]
pub enum UnresolvedReason {
	/// No module is registered under the dependency's name.
	NotRegistered,
	/// The dependency transitively depends on itself.
	Cycle,
	/// The dependency is registered but is itself waiting on something that never completed.
	Blocked,
}

impl std::fmt::Display for UnresolvedReason {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		match self {
			Self::NotRegistered => write!( f, "not registered" ),
			Self::Cycle => write!( f, "dependency cycle" ),
			Self::Blocked => write!( f, "blocked by its own dependencies" ),
		}
	}
}

/// A dependency that never completed during a pass, together with the modules
/// left waiting on it.
#[derive( Clone, Eq, PartialEq, Debug )]
pub struct UnresolvedDependency {
	dependency: String,
	waiting: NEVec<String>,
	reason: UnresolvedReason,
}

impl UnresolvedDependency {

	/// Name of the dependency that never completed.
	#[inline] pub fn dependency( &self ) -> &str { &self.dependency }

	/// Distinct names of the modules waiting on it, in the order they started waiting.
	#[inline] pub fn waiting( &self ) -> &NEVec<String> { &self.waiting }

	/// Whether `name` is among the waiting modules.
	pub fn is_waiting( &self, name: &str ) -> bool {
		self.waiting.iter().any(| waiting | waiting == name )
	}

	/// Why the dependency never completed.
	#[inline] pub fn reason( &self ) -> UnresolvedReason { self.reason }

}

impl std::fmt::Display for UnresolvedDependency {
	fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
		write!(
			f, "Modules still waiting for '{}' ({}): {}",
			self.dependency, self.reason, self.waiting.iter().join( ", " ),
		)
	}
}

/// Bookkeeping owned by a single pass.
struct PassState<'m, E> {
	modules: &'m [ModuleDescriptor<E>],
	completed: HashSet<&'m str>,
	/// Dependency name -> indices of the modules parked on it
	waiting: BTreeMap<&'m str, Vec<usize>>,
	/// Per module: how many distinct dependencies are still outstanding
	missing: Vec<usize>,
	initialized: Vec<bool>,
	order: Vec<&'m str>,
}

impl<'m, E> PassState<'m, E> {

	fn new( modules: &'m [ModuleDescriptor<E>] ) -> Self {
		Self {
			modules,
			completed: HashSet::new(),
			waiting: BTreeMap::new(),
			missing: vec![ 0; modules.len() ],
			initialized: vec![ false; modules.len() ],
			order: Vec::with_capacity( modules.len() ),
		}
	}

	fn attempt(
		&mut self,
		index: usize,
		initialize: &mut impl FnMut( &ModuleDescriptor<E> ) -> Result<(), PassError>,
	) -> Result<(), PassError> {

		let modules = self.modules ;
		let descriptor = &modules[ index ];
		let missing = descriptor.dependencies().iter()
			.map( String::as_str )
			.unique()
			.filter(| dependency | !self.completed.contains( dependency ))
			.collect_vec();

		if missing.is_empty() { return self.complete( index, initialize ) }

		trace!( "Deferring '{}' until [{}] complete", descriptor.name(), missing.iter().join( ", " ));
		self.missing[ index ] = missing.len();
		missing.into_iter().for_each(| dependency | self.waiting.entry( dependency ).or_default().push( index ));
		Ok(())

	}

	/// Initializes the module at `index` and releases everything its completion unblocks.
	fn complete(
		&mut self,
		index: usize,
		initialize: &mut impl FnMut( &ModuleDescriptor<E> ) -> Result<(), PassError>,
	) -> Result<(), PassError> {

		let modules = self.modules ;
		let mut completions = VecDeque::from([ index ]);

		while let Some( index ) = completions.pop_front() {

			let descriptor = &modules[ index ];
			initialize( descriptor )?;
			self.initialized[ index ] = true ;
			self.completed.insert( descriptor.name() );
			self.order.push( descriptor.name() );

			let Some( waiters ) = self.waiting.remove( descriptor.name() ) else { continue };
			for waiter in waiters {
				if self.initialized[ waiter ] { continue }
				self.missing[ waiter ] = self.missing[ waiter ].saturating_sub( 1 );
				if self.missing[ waiter ] == 0 {
					trace!( "'{}' released '{}'", descriptor.name(), modules[ waiter ].name() );
					completions.push_back( waiter );
				}
			}

		}

		Ok(())

	}

	fn into_report( self ) -> PartialSuccess<Vec<String>, UnresolvedDependency> {

		let modules = self.modules ;
		let unresolved = self.waiting.iter()
			.filter_map(|( &dependency, waiters )| {
				let mut names = waiters.iter().map(| &index | modules[ index ].name() ).unique();
				let mut waiting = NEVec::new( names.next()?.to_string() );
				names.for_each(| name | waiting.push( name.to_string() ));
				Some( UnresolvedDependency {
					dependency: dependency.to_string(),
					waiting,
					reason: self.classify( dependency ),
				})
			})
			.collect();

		( self.order.into_iter().map( str::to_string ).collect(), unresolved )

	}

	fn classify( &self, dependency: &str ) -> UnresolvedReason {
		if !is_registered( self.modules, dependency ) {
			return UnresolvedReason::NotRegistered ;
		}
		match self.reaches( dependency, dependency ) {
			true => UnresolvedReason::Cycle,
			false => UnresolvedReason::Blocked,
		}
	}

	/// Whether `target` is reachable from `from` through dependencies that never completed.
	fn reaches( &self, from: &str, target: &str ) -> bool {

		let mut visited = HashSet::new();
		let mut pending = vec![ from ];

		while let Some( name ) = pending.pop() {
			let outstanding = self.modules.iter()
				.enumerate()
				.filter(|( index, descriptor )| descriptor.name() == name && !self.initialized[ *index ] )
				.flat_map(|( _, descriptor )| descriptor.dependencies() )
				.map( String::as_str )
				.filter(| dependency | !self.completed.contains( dependency ));
			for dependency in outstanding {
				if dependency == target { return true }
				if visited.insert( dependency ) { pending.push( dependency ) }
			}
		}

		false

	}

}

/// Runs one dependency-ordered pass over `modules`.
///
/// `initialize` is called exactly once for every module whose dependencies all
/// complete, after each of them. Returns the names in completion order alongside
/// the dependencies that never completed.
///
/// # Errors
/// The first error returned by `initialize` aborts the pass and is passed through.
pub(crate) fn resolve<E>(
	modules: &[ModuleDescriptor<E>],
	mut initialize: impl FnMut( &ModuleDescriptor<E> ) -> Result<(), PassError>,
) -> Result<PartialSuccess<Vec<String>, UnresolvedDependency>, PassError> {

	let mut state = PassState::new( modules );
	( 0..modules.len() ).try_for_each(| index | state.attempt( index, &mut initialize ))?;
	Ok( state.into_report() )

}
