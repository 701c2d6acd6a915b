/*! Fluent builders for fixture programs.
 *
 * [`DexBuilder`] owns the type index and the registered classes; class,
 * method, and field builders collect declarations and wire owners,
 * supertype chains, and operand references on `build()`. Collections keep
 * declaration order, so queries over them are deterministic.
 */

use crate::model::{
    Anno, Class, ClassData, Field, FieldData, Insn, Method, MethodData, Ty, TyData, Verdicts,
};
use dexsift_model::AccessFlags;
use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("class already defined: {0}")]
    DuplicateClass(String),
    #[error("bodyless method cannot carry code: {class}.{method}")]
    CodeOnBodylessMethod { class: String, method: String },
}

/// Owner of interned types and registered classes.
pub struct DexBuilder {
    types: IndexMap<String, Ty>,
    classes: IndexMap<String, Class>,
}

impl DexBuilder {
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
            classes: IndexMap::new(),
        }
    }

    /// Intern a type by descriptor. Interning never fails; a type may exist
    /// long before (or without) a class definition behind it.
    pub fn ty(&mut self, descriptor: &str) -> Ty {
        if let Some(t) = self.types.get(descriptor) {
            return t.clone();
        }
        let t = Ty(Arc::new(TyData {
            descriptor: descriptor.to_string(),
            supertype: OnceLock::new(),
            class: OnceLock::new(),
        }));
        self.types.insert(descriptor.to_string(), t.clone());
        t
    }

    /// Start a class definition.
    pub fn class(&mut self, descriptor: &str) -> ClassBuilder<'_> {
        ClassBuilder {
            dex: self,
            descriptor: descriptor.to_string(),
            access: AccessFlags::PUBLIC,
            superclass: None,
            external: false,
            vmethods: Vec::new(),
            dmethods: Vec::new(),
            ifields: Vec::new(),
            sfields: Vec::new(),
            annotations: None,
            verdicts: Verdicts::default(),
        }
    }

    pub fn get_class(&self, descriptor: &str) -> Option<&Class> {
        self.classes.get(descriptor)
    }

    /// Registered classes, in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }
}

impl Default for DexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ClassBuilder<'a> {
    dex: &'a mut DexBuilder,
    descriptor: String,
    access: AccessFlags,
    superclass: Option<String>,
    external: bool,
    vmethods: Vec<MethodBuilder>,
    dmethods: Vec<MethodBuilder>,
    ifields: Vec<FieldBuilder>,
    sfields: Vec<FieldBuilder>,
    annotations: Option<Vec<String>>,
    verdicts: Verdicts,
}

impl<'a> ClassBuilder<'a> {
    pub fn access(mut self, flags: AccessFlags) -> Self {
        self.access = flags;
        self
    }

    pub fn extends(mut self, descriptor: &str) -> Self {
        self.superclass = Some(descriptor.to_string());
        self
    }

    /// Mark the class as defined outside the program. External classes
    /// carry no class data.
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn vmethod(mut self, method: MethodBuilder) -> Self {
        self.vmethods.push(method);
        self
    }

    pub fn dmethod(mut self, method: MethodBuilder) -> Self {
        self.dmethods.push(method);
        self
    }

    pub fn ifield(mut self, field: FieldBuilder) -> Self {
        self.ifields.push(field);
        self
    }

    pub fn sfield(mut self, field: FieldBuilder) -> Self {
        self.sfields.push(field);
        self
    }

    /// Attach an annotation by type descriptor, creating the annotation set
    /// on first use.
    pub fn annotation(mut self, descriptor: &str) -> Self {
        self.annotations
            .get_or_insert_with(Vec::new)
            .push(descriptor.to_string());
        self
    }

    pub fn keep(mut self) -> Self {
        self.verdicts.keep = true;
        self.verdicts.can_delete = false;
        self
    }

    pub fn seed(mut self) -> Self {
        self.verdicts.seed = true;
        self.verdicts.can_delete = false;
        self
    }

    pub fn no_delete(mut self) -> Self {
        self.verdicts.can_delete = false;
        self
    }

    pub fn no_rename(mut self) -> Self {
        self.verdicts.can_rename = false;
        self
    }

    pub fn build(self) -> Result<Class, BuildError> {
        let ClassBuilder {
            dex,
            descriptor,
            access,
            superclass,
            external,
            vmethods,
            dmethods,
            ifields,
            sfields,
            annotations,
            verdicts,
        } = self;

        if dex.classes.contains_key(&descriptor) {
            return Err(BuildError::DuplicateClass(descriptor));
        }

        let ty = dex.ty(&descriptor);
        if let Some(sup) = superclass {
            let sup_ty = dex.ty(&sup);
            let _ = ty.0.supertype.set(sup_ty);
        }

        let vmethods = vmethods
            .into_iter()
            .map(|m| m.build(dex, &ty, &descriptor))
            .collect::<Result<Vec<_>, _>>()?;
        let dmethods = dmethods
            .into_iter()
            .map(|m| m.build(dex, &ty, &descriptor))
            .collect::<Result<Vec<_>, _>>()?;
        let ifields = ifields
            .into_iter()
            .map(|f| f.build(dex, &ty))
            .collect::<Vec<_>>();
        let sfields = sfields
            .into_iter()
            .map(|f| f.build(dex, &ty))
            .collect::<Vec<_>>();
        let annotations =
            annotations.map(|descs| descs.iter().map(|d| Anno::new(&dex.ty(d))).collect());

        let has_class_data = !external
            && (!vmethods.is_empty()
                || !dmethods.is_empty()
                || !ifields.is_empty()
                || !sfields.is_empty());

        let class = Class(Arc::new(ClassData {
            ty: ty.clone(),
            access,
            external,
            has_class_data,
            vmethods,
            dmethods,
            ifields,
            sfields,
            annotations,
            verdicts,
        }));
        let _ = ty.0.class.set(Arc::downgrade(&class.0));
        dex.classes.insert(descriptor, class.clone());
        Ok(class)
    }
}

pub struct MethodBuilder {
    name: String,
    access: AccessFlags,
    params: Vec<String>,
    code: Option<Vec<Insn>>,
    annotations: Option<Vec<String>>,
    verdicts: Verdicts,
}

impl MethodBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            access: AccessFlags::PUBLIC,
            params: Vec::new(),
            code: None,
            annotations: None,
            verdicts: Verdicts::default(),
        }
    }

    pub fn access(mut self, flags: AccessFlags) -> Self {
        self.access = flags;
        self
    }

    /// Append a declared parameter by type descriptor.
    pub fn param(mut self, descriptor: &str) -> Self {
        self.params.push(descriptor.to_string());
        self
    }

    pub fn code(mut self, insns: Vec<Insn>) -> Self {
        self.code = Some(insns);
        self
    }

    pub fn annotation(mut self, descriptor: &str) -> Self {
        self.annotations
            .get_or_insert_with(Vec::new)
            .push(descriptor.to_string());
        self
    }

    pub fn keep(mut self) -> Self {
        self.verdicts.keep = true;
        self.verdicts.can_delete = false;
        self
    }

    pub fn seed(mut self) -> Self {
        self.verdicts.seed = true;
        self.verdicts.can_delete = false;
        self
    }

    pub fn no_delete(mut self) -> Self {
        self.verdicts.can_delete = false;
        self
    }

    pub fn no_rename(mut self) -> Self {
        self.verdicts.can_rename = false;
        self
    }

    fn build(self, dex: &mut DexBuilder, owner: &Ty, class_desc: &str) -> Result<Method, BuildError> {
        if self.code.is_some()
            && self
                .access
                .intersects(AccessFlags::ABSTRACT | AccessFlags::NATIVE)
        {
            return Err(BuildError::CodeOnBodylessMethod {
                class: class_desc.to_string(),
                method: self.name,
            });
        }
        let params = self.params.iter().map(|d| dex.ty(d)).collect();
        let annotations = self
            .annotations
            .map(|descs| descs.iter().map(|d| Anno::new(&dex.ty(d))).collect());
        Ok(Method(Arc::new(MethodData {
            name: self.name,
            access: self.access,
            owner: owner.clone(),
            params,
            code: self.code,
            annotations,
            verdicts: self.verdicts,
        })))
    }
}

pub struct FieldBuilder {
    name: String,
    ty: String,
    access: AccessFlags,
    annotations: Option<Vec<String>>,
    verdicts: Verdicts,
}

impl FieldBuilder {
    pub fn new(name: &str, type_descriptor: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: type_descriptor.to_string(),
            access: AccessFlags::PUBLIC,
            annotations: None,
            verdicts: Verdicts::default(),
        }
    }

    pub fn access(mut self, flags: AccessFlags) -> Self {
        self.access = flags;
        self
    }

    pub fn annotation(mut self, descriptor: &str) -> Self {
        self.annotations
            .get_or_insert_with(Vec::new)
            .push(descriptor.to_string());
        self
    }

    pub fn keep(mut self) -> Self {
        self.verdicts.keep = true;
        self.verdicts.can_delete = false;
        self
    }

    pub fn seed(mut self) -> Self {
        self.verdicts.seed = true;
        self.verdicts.can_delete = false;
        self
    }

    pub fn no_delete(mut self) -> Self {
        self.verdicts.can_delete = false;
        self
    }

    pub fn no_rename(mut self) -> Self {
        self.verdicts.can_rename = false;
        self
    }

    fn build(self, dex: &mut DexBuilder, owner: &Ty) -> Field {
        let ty = dex.ty(&self.ty);
        let annotations = self
            .annotations
            .map(|descs| descs.iter().map(|d| Anno::new(&dex.ty(d))).collect());
        Field(Arc::new(FieldData {
            name: self.name,
            access: self.access,
            owner: owner.clone(),
            ty,
            annotations,
            verdicts: self.verdicts,
        }))
    }
}
