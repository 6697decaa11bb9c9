use crate::PropertyError;

/// The in-progress dotted path of one chain.
///
/// Also keeps the first failure seen on the chain, which [`drain`] reports in
/// place of the path.
///
/// # Examples
///
/// ```
/// use pn_proxy::chain::PathAccumulator;
/// use pn_proxy::PropertyError;
///
/// let mut acc = PathAccumulator::new();
/// acc.append("customer");
/// acc.append("legalName");
/// assert_eq!(acc.drain().unwrap(), "customer.legalName");
///
/// // Draining clears the path.
/// assert_eq!(acc.drain(), Err(PropertyError::NoPropertyRecorded));
/// ```
///
/// [`drain`]: PathAccumulator::drain
#[derive(Debug, Default)]
pub struct PathAccumulator {
    path: Option<String>,
    failure: Option<PropertyError>,
}

impl PathAccumulator {
    /// Creates an empty accumulator.
    #[inline]
    pub const fn new() -> Self {
        Self {
            path: None,
            failure: None,
        }
    }

    /// Extends the path with `name`, joined by `.`.
    pub fn append(&mut self, name: &str) {
        match &mut self.path {
            Some(path) => {
                path.push('.');
                path.push_str(name);
            }
            None => self.path = Some(name.to_owned()),
        }
    }

    /// Records a failure. Only the first one is kept.
    pub fn fail(&mut self, error: PropertyError) {
        if self.failure.is_none() {
            self.failure = Some(error);
        }
    }

    /// Returns the path recorded so far.
    #[inline]
    pub fn peek(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the recorded failure, if any.
    #[inline]
    pub fn failure(&self) -> Option<&PropertyError> {
        self.failure.as_ref()
    }

    /// Returns `true` if neither a path nor a failure is recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_none() && self.failure.is_none()
    }

    /// Takes the path out, leaving the accumulator empty.
    ///
    /// A recorded failure wins over the path. With nothing recorded the result
    /// is [`PropertyError::NoPropertyRecorded`].
    pub fn drain(&mut self) -> Result<String, PropertyError> {
        let path = self.path.take();
        if let Some(error) = self.failure.take() {
            return Err(error);
        }
        path.ok_or(PropertyError::NoPropertyRecorded)
    }
}

#[cfg(test)]
mod tests {
    use super::PathAccumulator;
    use crate::PropertyError;

    #[test]
    fn joins_in_call_order() {
        let mut acc = PathAccumulator::new();
        acc.append("customer");
        acc.append("addresses");
        acc.append("city");
        assert_eq!(acc.peek(), Some("customer.addresses.city"));
        assert_eq!(acc.drain().unwrap(), "customer.addresses.city");
        assert!(acc.is_empty());
    }

    #[test]
    fn first_failure_wins_and_clears_path() {
        let mut acc = PathAccumulator::new();
        acc.append("customer");
        acc.fail(PropertyError::NoPropertyRecorded);
        acc.fail(PropertyError::NonAccessorInvoked {
            type_path: "Contract",
            method: "recalculate",
        });

        assert_eq!(acc.drain(), Err(PropertyError::NoPropertyRecorded));
        assert!(acc.is_empty());
        assert_eq!(acc.drain(), Err(PropertyError::NoPropertyRecorded));
    }
}
