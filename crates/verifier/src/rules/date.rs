//! The `date` rule.

use crate::chain::{Verifier, reject};
use crate::error::{UsageError, UsageResult};
use crate::formats::{DateFormat, parse_free_form};
use crate::value::Value;

fn compile<'a>(rule: &'static str, format: Option<&'a str>) -> UsageResult<Option<DateFormat<'a>>> {
    format
        .map(|format| {
            DateFormat::compile(format).ok_or_else(|| {
                reject(UsageError::InvalidDateFormat {
                    rule,
                    format: format.to_owned(),
                })
            })
        })
        .transpose()
}

fn is_date(ctx: &Verifier, format: Option<&DateFormat<'_>>) -> bool {
    match ctx.data() {
        Value::Object(obj) => obj.as_date_time().is_some(),
        Value::String(s) => match format {
            Some(format) => format.round_trips(s, ctx.config().today()),
            None => parse_free_form(s, ctx.config()).is_some(),
        },
        _ => false,
    }
}

impl Verifier {
    /// The value is a date-time object, or a string holding a date.
    ///
    /// Without a format the string may be any expression the free-form
    /// parser understands. With a strftime format the string must parse and
    /// format back to itself, which rejects overflowing fields such as day
    /// `00` or hour `24`.
    ///
    /// ```
    /// use nebula_verifier::is;
    ///
    /// assert!(is("1977-11-06").date(None)?.resolve());
    /// assert!(is("19771106").date(Some("%Y%m%d"))?.resolve());
    /// assert!(!is("19771100").date(Some("%Y%m%d"))?.resolve());
    /// assert!(!is(19771106).date(Some("%Y%m%d"))?.resolve());
    /// assert!(is("19771106").date(Some("%Y%Q")).is_err());
    /// # Ok::<(), nebula_verifier::UsageError>(())
    /// ```
    pub fn date(self, format: Option<&str>) -> UsageResult<Self> {
        let format = compile("date", format)?;
        Ok(self.apply("date", |ctx| is_date(ctx, format.as_ref())))
    }

    /// Negation of [`date`](Self::date).
    pub fn not_date(self, format: Option<&str>) -> UsageResult<Self> {
        let format = compile("not_date", format)?;
        Ok(self.apply_negated("not_date", |ctx| is_date(ctx, format.as_ref())))
    }
}
