//! Domain Layer
//!
//! Menu entities, the fetch strategy and the tree builder, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Store rows, fetched records and built tree nodes
//! - `value_objects/` - Ids, fetch mode, config warnings
//! - `services/` - Row fetcher and tree builder
//! - `ports/` - The `MenuStore` interface implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Storage is reached only through the `MenuStore` port
//! 2. **Pure Functions** - The tree builder is a total function over records
//! 3. **Ports & Adapters** - Stores are injected, never looked up globally

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
