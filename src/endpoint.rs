//! Signature rewrites for controller endpoints.
//!
//! Each [`EndpointRewrite`] describes a single-statement (optionally
//! two-statement) controller method that delegates to `teacherService` with
//! `getCurrentUserId()`. Compiling it yields a [`PatchRule`] that appends an
//! `HttpServletRequest` parameter to the signature and passes it to
//! `getCurrentUserId(..)`.
//!
//! The whitespace runs inside the method body are captured and written back
//! unchanged, so the rewritten method keeps the layout (and line endings) of
//! the original.

use crate::error::RuleError;
use crate::rule::PatchRule;

/// Receiver the endpoint bodies delegate to.
pub const SERVICE_FIELD: &str = "teacherService";

/// Helper every rewritten call is routed through.
pub const USER_ID_HELPER: &str = "getCurrentUserId";

/// Type of the appended parameter.
pub const REQUEST_TYPE: &str = "HttpServletRequest";

/// One controller method to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointRewrite {
    /// Declared return type, e.g. `Result<List<CourseSection>>`.
    pub return_type: &'static str,
    /// Method name. The service method it calls has the same name.
    pub method: &'static str,
    /// Parameter list as it appears before the rewrite.
    pub params: &'static str,
    /// Statement preceding the `return`, if any.
    pub prelude: Option<&'static str>,
    /// Service call arguments before the user id.
    pub call_args: &'static str,
}

impl EndpointRewrite {
    /// Name of the appended request parameter.
    ///
    /// Methods that already bind `request` (a `@RequestBody`) get
    /// `httpRequest` instead.
    pub fn request_name(&self) -> &'static str {
        let binds_request = self
            .params
            .split(',')
            .filter_map(|param| param.split_whitespace().last())
            .any(|name| name == "request");
        if binds_request {
            "httpRequest"
        } else {
            "request"
        }
    }

    /// The method as it reads before the rewrite, laid out on one line.
    pub fn original_source(&self) -> String {
        self.render(self.params, "", " ", " ")
    }

    /// The method as it reads after the rewrite, laid out on one line.
    pub fn patched_source(&self) -> String {
        let params = format!("{}, {} {}", self.params, REQUEST_TYPE, self.request_name());
        self.render(&params, self.request_name(), " ", " ")
    }

    fn render(&self, params: &str, user_id_arg: &str, open: &str, close: &str) -> String {
        let prelude = self
            .prelude
            .map(|stmt| format!("{stmt} "))
            .unwrap_or_default();
        format!(
            "public {ret} {method}({params}) {{{open}{prelude}return {SERVICE_FIELD}.{method}({args}, {USER_ID_HELPER}({user_id_arg}));{close}}}",
            ret = self.return_type,
            method = self.method,
            args = self.call_args,
        )
    }

    /// Regex matching the method before the rewrite.
    ///
    /// Literal text is escaped; only the whitespace between `{`, the body
    /// statements and `}` is free, and each run is captured by name.
    pub fn pattern(&self) -> String {
        let prelude = match self.prelude {
            Some(stmt) => format!(r"{}(?P<gap>\s*)", regex::escape(stmt)),
            None => String::new(),
        };
        format!(
            r"{signature} \{{(?P<open>\s*){prelude}{call}(?P<close>\s*)\}}",
            signature = regex::escape(&format!(
                "public {} {}({})",
                self.return_type, self.method, self.params
            )),
            call = regex::escape(&format!(
                "return {SERVICE_FIELD}.{}({}, {USER_ID_HELPER}());",
                self.method, self.call_args
            )),
        )
    }

    /// Replacement template for [`Self::pattern`].
    pub fn replacement(&self) -> String {
        let request = self.request_name();
        let prelude = match self.prelude {
            Some(stmt) => format!("{}${{gap}}", escape_replacement(stmt)),
            None => String::new(),
        };
        let signature = escape_replacement(&format!(
            "public {} {}({}, {REQUEST_TYPE} {request})",
            self.return_type, self.method, self.params
        ));
        let call = escape_replacement(&format!(
            "return {SERVICE_FIELD}.{}({}, {USER_ID_HELPER}({request}));",
            self.method, self.call_args
        ));
        format!("{signature} {{${{open}}{prelude}{call}${{close}}}}")
    }

    /// Compile into a rule identified by the method name.
    pub fn to_rule(self) -> Result<PatchRule, RuleError> {
        PatchRule::new(self.method, &self.pattern(), self.replacement())
    }
}

/// Escape `$` so literal text survives replacement expansion.
fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}
