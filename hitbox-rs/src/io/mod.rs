/// Exporting a [`Hitbox`](crate::Hitbox) into its external representation
pub mod export;

/// Set of structs representing the serialized form of hitboxes
pub mod ext_repr;

/// Importing a [`Hitbox`](crate::Hitbox) from its external representation
pub mod import;
