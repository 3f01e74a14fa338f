//! Projeções tipadas sobre `CrmObject`
//!
//! Cada tipo de objeto conhecido ganha um newtype com getters nomeados para
//! suas propriedades e relações. A projeção não copia dados: apenas envolve o
//! objeto genérico retornado pelo cliente.

/// Gera o newtype de projeção com conversões e acesso ao objeto genérico
macro_rules! crm_projection {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name($crate::crm::object::CrmObject);

        impl $name {
            /// Objeto local vazio deste tipo, pronto para receber propriedades
            pub fn new() -> Self {
                Self($crate::crm::object::CrmObject::new(INTERNAL_NAME, OBJECT_TYPE_ID))
            }

            pub fn id(&self) -> &str {
                self.0.id()
            }

            pub fn as_object(&self) -> &$crate::crm::object::CrmObject {
                &self.0
            }

            pub fn as_object_mut(&mut self) -> &mut $crate::crm::object::CrmObject {
                &mut self.0
            }

            pub fn into_inner(self) -> $crate::crm::object::CrmObject {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<$crate::crm::object::CrmObject> for $name {
            fn from(object: $crate::crm::object::CrmObject) -> Self {
                Self(object)
            }
        }
    };
}

pub mod company;
pub mod contact;
pub mod session;
pub mod training;
pub mod user;

pub use company::Company;
pub use contact::Contact;
pub use session::Session;
pub use training::Training;
pub use user::User;

/// Nome interno da coleção para um `object_type_id` conhecido
pub fn known_internal_name(object_type_id: &str) -> Option<&'static str> {
    match object_type_id {
        company::OBJECT_TYPE_ID => Some(company::INTERNAL_NAME),
        contact::OBJECT_TYPE_ID => Some(contact::INTERNAL_NAME),
        training::OBJECT_TYPE_ID => Some(training::INTERNAL_NAME),
        session::OBJECT_TYPE_ID => Some(session::INTERNAL_NAME),
        user::OBJECT_TYPE_ID => Some(user::INTERNAL_NAME),
        _ => None,
    }
}
