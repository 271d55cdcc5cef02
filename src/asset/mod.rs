//! Page asset resolution and ordering.
//!
//! | Module       | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | `dependency` | Client dependency ids (local file / engine module)   |
//! | `provider`   | Dev server and module resolver interfaces            |
//! | `entry`      | Client entry → script URL (dev and prod)             |
//! | `collect`    | Client dependencies → style/preload URLs             |
//! | `media`      | Media type inference                                 |
//! | `assemble`   | Typed, base-prefixed asset list                      |
//! | `sort`       | Push and early-hint ordering                         |

mod assemble;
mod collect;
mod dependency;
mod entry;
mod kind;
pub mod media;
mod provider;
mod sort;

// Types
pub use dependency::{ClientDependency, DependencyId, ENGINE_MODULE_PREFIX};
pub use kind::{AssetType, PageAsset, PreloadType};
pub use media::{MediaInfo, infer_media_type};

// Resolution
pub use collect::AssetCollector;
pub use entry::{DevResolver, EntryResolver, FS_PREFIX, ProdResolver};
pub use provider::{DevServer, ModuleResolver, PackageResolver, StaticDevServer};

// Assembly and ordering
pub use assemble::{PageContext, assemble, get_page_assets};
pub use sort::{hint_rank, push_rank, sort_for_early_hints, sort_for_push};
