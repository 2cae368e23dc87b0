use std::{collections::BTreeMap, fs, rc::Rc};

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::{Namespace, Value},
    },
};

impl Interpreter {
    /// Loads `module`, or returns its cached namespace.
    ///
    /// The first import of a name resolves `<module>.<extension>` on the
    /// configured search path, parses it and runs it in a fresh interpreter
    /// that shares only the configuration, the output sink and the builtin
    /// table with this one. The namespace exported by that run is cached, so
    /// later imports of the same name in this interpreter neither re-read nor
    /// re-execute the file.
    ///
    /// # Errors
    /// - [`RuntimeError::CircularImport`] if `module` is still being loaded
    ///   further up the import chain.
    /// - [`RuntimeError::ModuleNotFound`] if no file matches.
    /// - [`RuntimeError::ModuleIo`], [`RuntimeError::ModuleSyntax`] or
    ///   [`RuntimeError::ModuleFailed`] if the file cannot be read, parsed or
    ///   run.
    pub(crate) fn import_module(&mut self, module: &str, line: usize) -> EvalResult<Rc<Namespace>> {
        if let Some(namespace) = self.modules.get(module) {
            debug!(module, "module cache hit");
            return Ok(Rc::clone(namespace));
        }
        if self.import_chain.iter().any(|loading| loading == module) {
            return Err(RuntimeError::CircularImport { module: module.to_string(),
                                                      line });
        }

        let path = self.config
                       .resolve(module)
                       .ok_or_else(|| RuntimeError::ModuleNotFound { module: module.to_string(),
                                                                     line })?;
        debug!(module, path = %path.display(), "loading module");

        let source =
            fs::read_to_string(&path).map_err(|source| RuntimeError::ModuleIo { module:
                                                                                    module.to_string(),
                                                                                source,
                                                                                line })?;
        let program =
            crate::parse(&source).map_err(|source| RuntimeError::ModuleSyntax { module:
                                                                                     module.to_string(),
                                                                                 source,
                                                                                 line })?;

        let mut import_chain = self.import_chain.clone();
        import_chain.push(module.to_string());
        let mut child = Self::from_parts(Rc::clone(&self.config),
                                         Rc::clone(&self.output),
                                         self.builtins.clone(),
                                         import_chain);
        child.run(&program)
             .map_err(|source| RuntimeError::ModuleFailed { module: module.to_string(),
                                                            source: Box::new(source),
                                                            line })?;

        let namespace = Rc::new(child.export(module));
        debug!(module, exports = namespace.bindings.len(), "module loaded");
        self.modules.insert(module.to_string(), Rc::clone(&namespace));
        Ok(namespace)
    }

    /// Snapshots this interpreter's top-level functions and global variables.
    ///
    /// Globals win over functions of the same name.
    fn export(&self, name: &str) -> Namespace {
        let mut bindings = self.functions
                               .iter()
                               .map(|(name, function)| {
                                   (name.clone(), Value::Function(Rc::clone(function)))
                               })
                               .collect::<BTreeMap<_, _>>();
        bindings.extend(self.scopes
                            .globals()
                            .iter()
                            .map(|(name, value)| (name.clone(), value.clone())));

        Namespace { name: name.to_string(),
                    bindings }
    }
}
