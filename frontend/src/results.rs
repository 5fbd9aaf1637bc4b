use std::rc::Rc;

use shared::{ResultsAction, ResultsState};
use yew::Reducible;

/// Reducer wrapper so the results region can live in `use_reducer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct Results(pub ResultsState);

impl Reducible for Results {
    type Action = ResultsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}
