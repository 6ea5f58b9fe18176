//! Component style resolvers
//!
//! Each component kind has a resolver trait (a strategy with an `id` and a
//! `resolve` function) and a built-in default implementation. The
//! [`ComponentStyles`] registry holds exactly one resolver per kind; replacing
//! an entry produces a new registry and leaves every other entry as it was.
//!
//! Custom resolvers usually delegate to the default and adjust a field or two:
//!
//! ```rust
//! use ds_ui::styles::{
//!     ButtonResolver, ButtonSize, ButtonSpec, ButtonState, ButtonVariant, ComponentKind,
//!     ComponentStyles, DefaultButtonResolver,
//! };
//! use ds_ui::theme::Theme;
//!
//! struct PillButtons;
//!
//! impl ButtonResolver for PillButtons {
//!     fn id(&self) -> &'static str {
//!         "pill"
//!     }
//!
//!     fn resolve(
//!         &self,
//!         theme: &Theme,
//!         variant: ButtonVariant,
//!         size: ButtonSize,
//!         state: ButtonState,
//!     ) -> ButtonSpec {
//!         let base = DefaultButtonResolver.resolve(theme, variant, size, state);
//!         ButtonSpec {
//!             corner_radius: base.height / 2.0,
//!             ..base
//!         }
//!     }
//! }
//!
//! let theme = Theme::light().with_styles(ComponentStyles::default().with_button(PillButtons));
//! assert_eq!(theme.styles().resolver_id(ComponentKind::Button), "pill");
//! ```

mod button;
mod card;
mod field;
mod form_row;
mod list_row;
mod toggle;

pub use button::{
    ButtonResolver, ButtonSize, ButtonSpec, ButtonState, ButtonVariant, DefaultButtonResolver,
};
pub use card::{CardElevation, CardResolver, CardSpec, DefaultCardResolver};
pub use field::{DefaultFieldResolver, FieldResolver, FieldSpec, FieldState, FieldValidation};
pub use form_row::{
    DefaultFormRowResolver, FormRowLayoutMode, FormRowResolver, FormRowSpec, LabelAlignment,
};
pub use list_row::{
    DefaultListRowResolver, ListRowResolver, ListRowSpec, ListRowState, ListRowStyle,
};
pub use toggle::{DefaultToggleResolver, ToggleResolver, ToggleSpec, ToggleState};

#[cfg(test)]
pub(crate) use button::MockButtonResolver;
#[cfg(test)]
pub(crate) use card::MockCardResolver;
#[cfg(test)]
pub(crate) use field::MockFieldResolver;
#[cfg(test)]
pub(crate) use toggle::MockToggleResolver;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier shared by all built-in resolvers
pub const DEFAULT_RESOLVER_ID: &str = "default";

// =============================================================================
// Component Kinds
// =============================================================================

/// Component kinds with a registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// Buttons
    Button,
    /// Text fields
    Field,
    /// On/off toggles
    Toggle,
    /// Content cards
    Card,
    /// Form rows (label plus control)
    FormRow,
    /// List rows
    ListRow,
}

impl ComponentKind {
    /// Every component kind
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Button,
        ComponentKind::Field,
        ComponentKind::Toggle,
        ComponentKind::Card,
        ComponentKind::FormRow,
        ComponentKind::ListRow,
    ];
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComponentKind::Button => "button",
            ComponentKind::Field => "field",
            ComponentKind::Toggle => "toggle",
            ComponentKind::Card => "card",
            ComponentKind::FormRow => "form-row",
            ComponentKind::ListRow => "list-row",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Registry of component resolvers, one per kind
///
/// Cloning shares the resolvers; `with_*` replaces a single entry.
#[derive(Clone)]
pub struct ComponentStyles {
    button: Arc<dyn ButtonResolver>,
    field: Arc<dyn FieldResolver>,
    toggle: Arc<dyn ToggleResolver>,
    card: Arc<dyn CardResolver>,
    form_row: Arc<dyn FormRowResolver>,
    list_row: Arc<dyn ListRowResolver>,
}

impl Default for ComponentStyles {
    fn default() -> Self {
        Self {
            button: Arc::new(DefaultButtonResolver),
            field: Arc::new(DefaultFieldResolver),
            toggle: Arc::new(DefaultToggleResolver),
            card: Arc::new(DefaultCardResolver),
            form_row: Arc::new(DefaultFormRowResolver),
            list_row: Arc::new(DefaultListRowResolver),
        }
    }
}

impl ComponentStyles {
    /// Replace the button resolver
    pub fn with_button(mut self, resolver: impl ButtonResolver + 'static) -> Self {
        log_override(ComponentKind::Button, self.button.id(), resolver.id());
        self.button = Arc::new(resolver);
        self
    }

    /// Replace the field resolver
    pub fn with_field(mut self, resolver: impl FieldResolver + 'static) -> Self {
        log_override(ComponentKind::Field, self.field.id(), resolver.id());
        self.field = Arc::new(resolver);
        self
    }

    /// Replace the toggle resolver
    pub fn with_toggle(mut self, resolver: impl ToggleResolver + 'static) -> Self {
        log_override(ComponentKind::Toggle, self.toggle.id(), resolver.id());
        self.toggle = Arc::new(resolver);
        self
    }

    /// Replace the card resolver
    pub fn with_card(mut self, resolver: impl CardResolver + 'static) -> Self {
        log_override(ComponentKind::Card, self.card.id(), resolver.id());
        self.card = Arc::new(resolver);
        self
    }

    /// Replace the form row resolver
    pub fn with_form_row(mut self, resolver: impl FormRowResolver + 'static) -> Self {
        log_override(ComponentKind::FormRow, self.form_row.id(), resolver.id());
        self.form_row = Arc::new(resolver);
        self
    }

    /// Replace the list row resolver
    pub fn with_list_row(mut self, resolver: impl ListRowResolver + 'static) -> Self {
        log_override(ComponentKind::ListRow, self.list_row.id(), resolver.id());
        self.list_row = Arc::new(resolver);
        self
    }

    /// Registered button resolver
    pub fn button(&self) -> &dyn ButtonResolver {
        self.button.as_ref()
    }

    /// Registered field resolver
    pub fn field(&self) -> &dyn FieldResolver {
        self.field.as_ref()
    }

    /// Registered toggle resolver
    pub fn toggle(&self) -> &dyn ToggleResolver {
        self.toggle.as_ref()
    }

    /// Registered card resolver
    pub fn card(&self) -> &dyn CardResolver {
        self.card.as_ref()
    }

    /// Registered form row resolver
    pub fn form_row(&self) -> &dyn FormRowResolver {
        self.form_row.as_ref()
    }

    /// Registered list row resolver
    pub fn list_row(&self) -> &dyn ListRowResolver {
        self.list_row.as_ref()
    }

    /// Id of the resolver registered for a kind
    pub fn resolver_id(&self, kind: ComponentKind) -> &'static str {
        match kind {
            ComponentKind::Button => self.button.id(),
            ComponentKind::Field => self.field.id(),
            ComponentKind::Toggle => self.toggle.id(),
            ComponentKind::Card => self.card.id(),
            ComponentKind::FormRow => self.form_row.id(),
            ComponentKind::ListRow => self.list_row.id(),
        }
    }

    /// Ids of every registered resolver, in [`ComponentKind::ALL`] order
    pub fn resolver_ids(&self) -> [(ComponentKind, &'static str); 6] {
        ComponentKind::ALL.map(|kind| (kind, self.resolver_id(kind)))
    }

    /// Whether every entry reports the built-in resolver id
    ///
    /// Only ids are checked. A custom resolver that returns
    /// [`DEFAULT_RESOLVER_ID`] from `id` counts as built-in here even if it
    /// resolves differently, so custom resolvers should use their own id.
    pub fn is_default(&self) -> bool {
        self.resolver_ids()
            .iter()
            .all(|(_, id)| *id == DEFAULT_RESOLVER_ID)
    }
}

fn log_override(kind: ComponentKind, previous: &str, next: &str) {
    tracing::debug!(component = %kind, previous, next, "Replacing style resolver");
}

impl std::fmt::Debug for ComponentStyles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentStyles")
            .field("button", &self.button.id())
            .field("field", &self.field.id())
            .field("toggle", &self.toggle.id())
            .field("card", &self.card.id())
            .field("form_row", &self.form_row.id())
            .field("list_row", &self.list_row.id())
            .finish()
    }
}

/// Registries compare by resolver id
///
/// Resolvers are opaque, so two registries whose resolvers share ids are
/// equal even if those resolvers produce different specs.
impl PartialEq for ComponentStyles {
    fn eq(&self, other: &Self) -> bool {
        self.resolver_ids() == other.resolver_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ds_platform::{capabilities_for, Platform};

    fn default_button() -> ButtonSpec {
        DefaultButtonResolver.resolve(
            &Theme::light(),
            ButtonVariant::Primary,
            ButtonSize::Medium,
            ButtonState::Normal,
        )
    }

    // ==========================================================================
    // Registry Tests
    // ==========================================================================

    #[test]
    fn test_default_registry_ids() {
        let styles = ComponentStyles::default();
        assert!(styles.is_default());
        for (kind, id) in styles.resolver_ids() {
            assert_eq!(id, DEFAULT_RESOLVER_ID, "{} is not default", kind);
        }
    }

    #[test]
    fn test_component_kind_display() {
        assert_eq!(ComponentKind::Button.to_string(), "button");
        assert_eq!(ComponentKind::FormRow.to_string(), "form-row");
        assert_eq!(ComponentKind::ListRow.to_string(), "list-row");
    }

    #[test]
    fn test_override_replaces_only_one_entry() {
        let mut mock = MockButtonResolver::new();
        mock.expect_id().return_const("mock");

        let styles = ComponentStyles::default().with_button(mock);
        assert_eq!(styles.resolver_id(ComponentKind::Button), "mock");
        for kind in ComponentKind::ALL.into_iter().filter(|k| *k != ComponentKind::Button) {
            assert_eq!(styles.resolver_id(kind), DEFAULT_RESOLVER_ID);
        }
        assert!(!styles.is_default());
    }

    #[test]
    fn test_override_leaves_original_registry_unchanged() {
        let original = ComponentStyles::default();

        let mut mock = MockCardResolver::new();
        mock.expect_id().return_const("glassless");
        let overridden = original.clone().with_card(mock);

        assert_eq!(original.resolver_id(ComponentKind::Card), DEFAULT_RESOLVER_ID);
        assert_eq!(overridden.resolver_id(ComponentKind::Card), "glassless");
        assert_ne!(original, overridden);
    }

    #[test]
    fn test_last_registration_wins() {
        let mut first = MockToggleResolver::new();
        first.expect_id().return_const("first");
        let mut second = MockToggleResolver::new();
        second.expect_id().return_const("second");

        let styles = ComponentStyles::default().with_toggle(first).with_toggle(second);
        assert_eq!(styles.resolver_id(ComponentKind::Toggle), "second");
    }

    #[test]
    fn test_theme_delegates_to_registered_resolver() {
        let expected = ButtonSpec {
            corner_radius: 22.0,
            ..default_button()
        };
        let returned = expected.clone();

        let mut mock = MockButtonResolver::new();
        mock.expect_id().return_const("pill");
        mock.expect_resolve()
            .withf(|_, variant, size, state| {
                *variant == ButtonVariant::Primary
                    && *size == ButtonSize::Medium
                    && *state == ButtonState::Normal
            })
            .times(1)
            .returning(move |_, _, _, _| returned.clone());

        let theme = Theme::light().with_styles(ComponentStyles::default().with_button(mock));
        let spec =
            theme.resolve_button(ButtonVariant::Primary, ButtonSize::Medium, ButtonState::Normal);

        assert_eq!(spec, expected);
    }

    #[test]
    fn test_override_does_not_affect_other_kinds() {
        let mut mock = MockFieldResolver::new();
        mock.expect_id().return_const("custom-field");
        mock.expect_resolve().never();

        let custom = Theme::light().with_styles(ComponentStyles::default().with_field(mock));
        let caps = capabilities_for(Platform::Phone);

        assert_eq!(
            custom.resolve_button(ButtonVariant::Primary, ButtonSize::Medium, ButtonState::Normal),
            default_button()
        );
        assert_eq!(
            custom.resolve_list_row(ListRowStyle::Plain, ListRowState::Normal, &caps),
            Theme::light().resolve_list_row(ListRowStyle::Plain, ListRowState::Normal, &caps)
        );
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let tall = ButtonSpec {
            height: 99.0,
            ..default_button()
        };

        let mut mock = MockButtonResolver::new();
        mock.expect_id().return_const(DEFAULT_RESOLVER_ID);
        mock.expect_resolve().returning(move |_, _, _, _| tall.clone());

        let styles = ComponentStyles::default().with_button(mock);
        assert!(styles.is_default());
        assert_eq!(styles, ComponentStyles::default());

        let theme = Theme::light().with_styles(styles);
        assert_eq!(theme, Theme::light());
        let spec =
            theme.resolve_button(ButtonVariant::Primary, ButtonSize::Medium, ButtonState::Normal);
        assert_eq!(spec.height, 99.0);
        assert_eq!(default_button().height, 44.0);
    }

    #[test]
    fn test_registry_debug_lists_ids() {
        let debug = format!("{:?}", ComponentStyles::default());
        assert!(debug.contains("ComponentStyles"));
        assert!(debug.contains("\"default\""));
    }
}
