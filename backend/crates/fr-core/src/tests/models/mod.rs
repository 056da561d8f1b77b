mod content_kind;
mod profile;
mod verified_identity;
