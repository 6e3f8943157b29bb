use crate::ast;
use crate::loc;
use crate::types::GraphQLTypeKind;

/// A type declared in SDL text (object, interface, union, enum, input
/// object, or scalar), with any `extend ...` blocks already merged in.
#[derive(Clone, Debug, PartialEq)]
pub struct DefinedType {
    pub(crate) def: ast::schema::TypeDefinition,
    pub(crate) def_location: loc::SourceLocation,
}
impl DefinedType {
    pub fn ast(&self) -> &ast::schema::TypeDefinition {
        &self.def
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        GraphQLTypeKind::from(&self.def)
    }

    /// Folds the contents of an `extend ...` block into this type.
    ///
    /// Hands the extension back unchanged if it extends a different kind of
    /// type than this one.
    pub(crate) fn merge_extension(
        &mut self,
        ext: ast::schema::TypeExtension,
    ) -> Result<(), ast::schema::TypeExtension> {
        use ast::schema::TypeDefinition as Def;
        use ast::schema::TypeExtension as Ext;
        match (&mut self.def, ext) {
            (Def::Enum(def), Ext::Enum(mut ext)) => {
                def.directives.append(&mut ext.directives);
                def.values.append(&mut ext.values);
            },

            (Def::InputObject(def), Ext::InputObject(mut ext)) => {
                def.directives.append(&mut ext.directives);
                def.fields.append(&mut ext.fields);
            },

            (Def::Interface(def), Ext::Interface(mut ext)) => {
                def.implements_interfaces.append(&mut ext.implements_interfaces);
                def.directives.append(&mut ext.directives);
                def.fields.append(&mut ext.fields);
            },

            (Def::Object(def), Ext::Object(mut ext)) => {
                def.implements_interfaces.append(&mut ext.implements_interfaces);
                def.directives.append(&mut ext.directives);
                def.fields.append(&mut ext.fields);
            },

            (Def::Scalar(def), Ext::Scalar(mut ext)) => {
                def.directives.append(&mut ext.directives);
            },

            (Def::Union(def), Ext::Union(mut ext)) => {
                def.directives.append(&mut ext.directives);
                def.types.append(&mut ext.types);
            },

            (_, ext) => return Err(ext),
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        type_def_name(&self.def)
    }
}

pub(crate) fn type_def_name(def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(def) => def.name.as_str(),
        TypeDefinition::InputObject(def) => def.name.as_str(),
        TypeDefinition::Interface(def) => def.name.as_str(),
        TypeDefinition::Object(def) => def.name.as_str(),
        TypeDefinition::Scalar(def) => def.name.as_str(),
        TypeDefinition::Union(def) => def.name.as_str(),
    }
}

pub(crate) fn type_ext_name(ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}

pub(crate) fn type_ext_position(ext: &ast::schema::TypeExtension) -> ast::Pos {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.position,
        TypeExtension::InputObject(ext) => ext.position,
        TypeExtension::Interface(ext) => ext.position,
        TypeExtension::Object(ext) => ext.position,
        TypeExtension::Scalar(ext) => ext.position,
        TypeExtension::Union(ext) => ext.position,
    }
}

pub(crate) fn type_def_position(def: &ast::schema::TypeDefinition) -> ast::Pos {
    use ast::schema::TypeDefinition;
    match def {
        TypeDefinition::Enum(def) => def.position,
        TypeDefinition::InputObject(def) => def.position,
        TypeDefinition::Interface(def) => def.position,
        TypeDefinition::Object(def) => def.position,
        TypeDefinition::Scalar(def) => def.position,
        TypeDefinition::Union(def) => def.position,
    }
}
