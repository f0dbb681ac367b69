macro_rules! impl_setter {
    ($(#[$meta:meta])* $self:ident, $field:ident, $type:ty) => {
        $(#[$meta])*
        pub fn $field(mut $self, $field: $type) -> Self {
            $self.$field = $field;
            $self
        }
    };
}

pub(crate) mod datastructures;

pub mod atoms;
pub mod bt_scheme;
pub mod chordal;
pub mod graph;
pub mod io;
pub mod minimal_separators;
pub mod parameter;
pub mod pmc;
pub mod separator;
pub mod solver;
pub mod subset_trie;
pub mod timeout;
pub mod triangulation;

#[cfg(feature = "pace-logging")]
pub mod logging;

pub use atoms::Atoms;
pub use bt_scheme::BTScheme;
pub use minimal_separators::MinimalSeparators;
pub use parameter::{MinimumFill, Parameter, Treewidth};
pub use pmc::potential_maximal_cliques;
pub use solver::{minimum_fill, treewidth, Solver, SolverResult};
pub use subset_trie::SubsetTrie;
pub use triangulation::MinimalTriangulation;
