use crate::ast;
use crate::loc;
use crate::schema::TypeValidationError;
use crate::types::DefinedType;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Checks that every type referenced anywhere in the schema exists, and
/// that no single type declares the same field (or enum value) twice.
///
/// Errors are collected rather than short-circuited so that one build
/// reports every dangling reference at once.
pub(super) struct TypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    types_map: &'a IndexMap<String, GraphQLType>,
}
impl<'a> TypeValidator<'a> {
    pub fn new(types_map: &'a IndexMap<String, GraphQLType>) -> Self {
        Self {
            errors: vec![],
            types_map,
        }
    }

    pub fn validate(
        mut self,
        directives: &[Directive],
        schema_def: Option<(&ast::schema::SchemaDefinition, &loc::SourceLocation)>,
    ) -> Vec<TypeValidationError> {
        let types_map = self.types_map;
        for type_ in types_map.values() {
            if let GraphQLType::Defined(defined) = type_ {
                self.validate_defined_type(defined);
            }
        }

        for directive in directives {
            if let Directive::Custom { def, def_location } = directive {
                self.check_input_values(
                    format!("@{}", def.name).as_str(),
                    &def.arguments,
                    def_location,
                );
            }
        }

        if let Some((schema_def, location)) = schema_def {
            let root_types = [
                ("schema.query", &schema_def.query),
                ("schema.mutation", &schema_def.mutation),
                ("schema.subscription", &schema_def.subscription),
            ];
            for (referenced_from, type_name) in root_types {
                if let Some(type_name) = type_name {
                    self.check_type_name(referenced_from, type_name, location);
                }
            }
        }

        self.errors
    }

    fn check_fields(
        &mut self,
        type_name: &str,
        fields: &[ast::schema::Field],
        location: &loc::SourceLocation,
    ) {
        let mut seen_field_names = HashSet::new();
        for field in fields {
            if !seen_field_names.insert(field.name.as_str()) {
                self.errors.push(TypeValidationError::DuplicateFieldName {
                    def_location: location.to_owned(),
                    field_name: field.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            let field_path = format!("{type_name}.{}", field.name);
            self.check_type_annotation(field_path.as_str(), &field.field_type, location);
            self.check_input_values(field_path.as_str(), &field.arguments, location);
        }
    }

    fn check_input_values(
        &mut self,
        owner: &str,
        input_values: &[ast::schema::InputValue],
        location: &loc::SourceLocation,
    ) {
        for input_value in input_values {
            self.check_type_annotation(
                format!("{owner}({})", input_value.name).as_str(),
                &input_value.value_type,
                location,
            );
        }
    }

    fn check_type_annotation(
        &mut self,
        referenced_from: &str,
        type_annotation: &ast::schema::Type,
        location: &loc::SourceLocation,
    ) {
        let type_name = innermost_type_name(type_annotation);
        self.check_type_name(referenced_from, type_name, location);
    }

    fn check_type_name(
        &mut self,
        referenced_from: &str,
        type_name: &str,
        location: &loc::SourceLocation,
    ) {
        if !self.types_map.contains_key(type_name) {
            self.errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: location.to_owned(),
                referenced_from: referenced_from.to_string(),
                undefined_type_name: type_name.to_string(),
            });
        }
    }

    fn validate_defined_type(&mut self, defined: &DefinedType) {
        use ast::schema::TypeDefinition;
        let location = defined.def_location();
        match defined.ast() {
            TypeDefinition::Enum(def) => {
                let mut seen_value_names = HashSet::new();
                for value in &def.values {
                    if !seen_value_names.insert(value.name.as_str()) {
                        self.errors.push(TypeValidationError::DuplicateEnumValueName {
                            def_location: location.to_owned(),
                            enum_name: def.name.to_string(),
                            value_name: value.name.to_string(),
                        });
                    }
                }
            },

            TypeDefinition::InputObject(def) => {
                let mut seen_field_names = HashSet::new();
                for field in &def.fields {
                    if !seen_field_names.insert(field.name.as_str()) {
                        self.errors.push(TypeValidationError::DuplicateFieldName {
                            def_location: location.to_owned(),
                            field_name: field.name.to_string(),
                            type_name: def.name.to_string(),
                        });
                    }
                    self.check_type_annotation(
                        format!("{}.{}", def.name, field.name).as_str(),
                        &field.value_type,
                        location,
                    );
                }
            },

            TypeDefinition::Interface(def) => {
                for iface_name in &def.implements_interfaces {
                    self.check_type_name(def.name.as_str(), iface_name, location);
                }
                self.check_fields(def.name.as_str(), &def.fields, location);
            },

            TypeDefinition::Object(def) => {
                for iface_name in &def.implements_interfaces {
                    self.check_type_name(def.name.as_str(), iface_name, location);
                }
                self.check_fields(def.name.as_str(), &def.fields, location);
            },

            TypeDefinition::Scalar(_) => (),

            TypeDefinition::Union(def) => {
                for member_name in &def.types {
                    self.check_type_name(def.name.as_str(), member_name, location);
                }
            },
        }
    }
}

fn innermost_type_name(type_annotation: &ast::schema::Type) -> &str {
    use ast::schema::Type;
    match type_annotation {
        Type::ListType(inner) | Type::NonNullType(inner) => innermost_type_name(inner),
        Type::NamedType(name) => name.as_str(),
    }
}
