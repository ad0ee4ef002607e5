//! Walk query construction.
//!
//! A walk starts at one object and follows links matching a sequence of
//! per-step filters. The store answers walks over GET requests whose URL
//! path encodes the start point and every step; this module builds that
//! path.

/// Placeholder used in compiled walk paths for an unspecified field.
pub const WILDCARD: &str = "_";

/// The object a walk starts from.
///
/// Both shapes are accepted at the API boundary and name the same
/// (bucket, key) identity; they compile to identical paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStart {
    /// Start given as named bucket and key fields.
    Named { bucket: String, key: String },
    /// Start given as a positional (bucket, key) pair.
    Pair(String, String),
}

impl WalkStart {
    pub fn named(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        WalkStart::Named {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Bucket of the start object, whichever shape was used.
    pub fn bucket(&self) -> &str {
        match self {
            WalkStart::Named { bucket, .. } => bucket,
            WalkStart::Pair(bucket, _) => bucket,
        }
    }

    /// Key of the start object, whichever shape was used.
    pub fn key(&self) -> &str {
        match self {
            WalkStart::Named { key, .. } => key,
            WalkStart::Pair(_, key) => key,
        }
    }
}

impl From<(String, String)> for WalkStart {
    fn from((bucket, key): (String, String)) -> Self {
        WalkStart::Pair(bucket, key)
    }
}

impl From<(&str, &str)> for WalkStart {
    fn from((bucket, key): (&str, &str)) -> Self {
        WalkStart::Pair(bucket.to_string(), key.to_string())
    }
}

/// One link filter in a walk.
///
/// Unset fields match any value and compile to the wildcard token.
/// An unset field is `None`, never a sentinel string; an empty string is
/// a (degenerate) present value and compiles as itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStep {
    /// Only follow links pointing into this bucket.
    pub bucket: Option<String>,
    /// Only follow links carrying this tag.
    pub tag: Option<String>,
    /// Include the objects matched at this step in the results. The
    /// final step of a walk is always included, whatever this says.
    pub keep: bool,
}

impl WalkStep {
    /// A step matching any link, not kept in the results.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = Some(bucket.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_keep(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }
}

/// Compile a walk start and step sequence into the store's URL path form.
///
/// The output is `<bucket>/<key>/` followed by one
/// `<bucket>,<tag>,<keep>/` segment per step. Unset step fields become
/// [`WILDCARD`]; the keep flag is `1` when the step is kept or terminal,
/// `_` otherwise. With no steps the output is just the start segment.
///
/// Bucket, key, and tag values must not contain `/` or `,`. The store's
/// path syntax reserves both, so this function performs no escaping and
/// the output for such values is undefined.
pub fn walk_path(start: &WalkStart, steps: &[WalkStep]) -> String {
    let mut path = format!("{}/{}/", start.bucket(), start.key());

    let last = steps.len().saturating_sub(1);
    for (i, step) in steps.iter().enumerate() {
        let bucket = step.bucket.as_deref().unwrap_or(WILDCARD);
        let tag = step.tag.as_deref().unwrap_or(WILDCARD);
        // The store always returns the terminal step's matches.
        let keep = if step.keep || i == last { "1" } else { WILDCARD };

        path.push_str(bucket);
        path.push(',');
        path.push_str(tag);
        path.push(',');
        path.push_str(keep);
        path.push('/');
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_is_start_only() {
        assert_eq!(walk_path(&("note", "1").into(), &[]), "note/1/");
    }

    #[test]
    fn terminal_step_is_always_kept() {
        let spec = [WalkStep::any().with_bucket("person").with_tag("author")];
        assert_eq!(
            walk_path(&("note", "456").into(), &spec),
            "note/456/person,author,1/"
        );
    }

    #[test]
    fn unset_fields_compile_to_wildcards() {
        let spec = [
            WalkStep::any().with_tag("knows").with_keep(true),
            WalkStep::any().with_bucket("person"),
        ];
        assert_eq!(
            walk_path(&("note", "456").into(), &spec),
            "note/456/_,knows,1/person,_,1/"
        );
    }

    #[test]
    fn all_default_step_by_position() {
        let spec = [WalkStep::any(), WalkStep::any()];
        assert_eq!(walk_path(&("a", "b").into(), &spec), "a/b/_,_,_/_,_,1/");
    }

    #[test]
    fn kept_intermediate_step_keeps_its_flag() {
        let spec = [WalkStep::any().with_keep(true), WalkStep::any().with_tag("t")];
        assert_eq!(walk_path(&("b", "k").into(), &spec), "b/k/_,_,1/_,t,1/");
    }

    #[test]
    fn start_shapes_compile_identically() {
        let spec = [WalkStep::any().with_tag("knows")];
        let named = walk_path(&WalkStart::named("note", "1"), &spec);
        let pair = walk_path(&WalkStart::Pair("note".into(), "1".into()), &spec);
        assert_eq!(named, pair);
    }

    #[test]
    fn compilation_is_deterministic() {
        let start = WalkStart::named("note", "1");
        let spec = [
            WalkStep::any().with_bucket("person").with_keep(true),
            WalkStep::any(),
        ];
        assert_eq!(walk_path(&start, &spec), walk_path(&start, &spec));
    }

    #[test]
    fn empty_string_field_is_not_a_wildcard() {
        let spec = [WalkStep::any().with_tag("")];
        assert_eq!(walk_path(&("b", "k").into(), &spec), "b/k/_,,1/");
    }
}
