//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

/// Resources to release when a payload leaves the cache
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DisposeFlags {
    pub geometry: bool,
    pub material: bool,
    pub textures: bool,
    pub remove_from_parent: bool,
}

impl DisposeFlags {
    /// Materials and textures are only released when the payload owns its material
    pub fn for_payload<P: TilePayload>(payload: &P) -> DisposeFlags {
        let exclusive = payload.has_exclusive_material();
        DisposeFlags {
            geometry: true,
            material: exclusive,
            textures: exclusive,
            remove_from_parent: true,
        }
    }
}

/// Scene object stored as tile payload
pub trait TilePayload {
    /// True if the payload has a material which is not shared with other objects
    fn has_exclusive_material(&self) -> bool;
}

/// Releases the resources of payloads removed from a cache
pub trait Dispose<P> {
    fn dispose(&mut self, payload: P, flags: DisposeFlags);
}

impl<P, F> Dispose<P> for F
where
    F: FnMut(P, DisposeFlags),
{
    fn dispose(&mut self, payload: P, flags: DisposeFlags) {
        self(payload, flags)
    }
}

/// Drops payloads without further cleanup
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDispose;

impl<P> Dispose<P> for NoDispose {
    fn dispose(&mut self, _payload: P, _flags: DisposeFlags) {}
}
