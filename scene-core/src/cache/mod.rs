//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod dispose;
pub mod index_set;
pub mod tilecache;


pub use self::dispose::{Dispose, DisposeFlags, NoDispose, TilePayload};
pub use self::index_set::IndexSet;
pub use self::tilecache::{CacheLimits, Rejected, TileCache};
