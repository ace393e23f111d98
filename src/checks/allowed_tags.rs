//! Permitted documentation tags per declaration kind

use crate::syntax::DeclarationKind;

/// Section tags that make sense on every documented declaration.
const UNIVERSAL_TAGS: &[&str] = &[
    "summary",
    "remarks",
    "example",
    "seealso",
    "see",
    "inheritdoc",
];

/// Inline markup tags, allowed anywhere and never reported.
const INLINE_TAGS: &[&str] = &[
    "c",
    "code",
    "para",
    "list",
    "item",
    "term",
    "description",
    "paramref",
    "typeparamref",
    "br",
];

/// True when `tag` is permitted on declarations of `kind`.
pub fn is_tag_allowed(kind: DeclarationKind, tag: &str) -> bool {
    if INLINE_TAGS.contains(&tag) {
        return true;
    }
    if UNIVERSAL_TAGS.contains(&tag) {
        // enum members are entries in a list; a full example block belongs
        // on the enum itself
        return !(kind == DeclarationKind::EnumMember && tag == "example");
    }
    match tag {
        "param" => allows_param(kind),
        "typeparam" => allows_type_param(kind),
        "returns" => allows_returns(kind),
        "value" => matches!(kind, DeclarationKind::Property | DeclarationKind::Indexer),
        "exception" => allows_exception(kind),
        _ => false,
    }
}

/// Kinds whose documentation may carry `<param>` tags.
pub fn allows_param(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::Method
            | DeclarationKind::Constructor
            | DeclarationKind::Delegate
            | DeclarationKind::Indexer
            | DeclarationKind::Operator
            | DeclarationKind::ConversionOperator
    )
}

/// Kinds whose documentation may carry `<typeparam>` tags.
pub fn allows_type_param(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::Class
            | DeclarationKind::Struct
            | DeclarationKind::Interface
            | DeclarationKind::Record
            | DeclarationKind::Method
            | DeclarationKind::Delegate
    )
}

fn allows_returns(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::Method
            | DeclarationKind::Delegate
            | DeclarationKind::Indexer
            | DeclarationKind::Operator
            | DeclarationKind::ConversionOperator
    )
}

fn allows_exception(kind: DeclarationKind) -> bool {
    matches!(
        kind,
        DeclarationKind::Method
            | DeclarationKind::Constructor
            | DeclarationKind::Property
            | DeclarationKind::Indexer
            | DeclarationKind::Event
            | DeclarationKind::Operator
            | DeclarationKind::ConversionOperator
    )
}
