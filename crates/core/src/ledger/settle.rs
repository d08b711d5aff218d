//! Settlement transfer suggestions.
//!
//! Turns a set of outstanding balances into a short, deterministic list of
//! "who pays whom" transfers that zero every net out. Suggestions only;
//! executing payments is the collaborator's business.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use splitra_shared::{MoneyAmount, PersonId};

use super::aggregate::PersonBalance;
use super::classify::BalanceClassifier;

/// A suggested payment from one person to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Who pays.
    pub from: PersonId,
    /// Who receives.
    pub to: PersonId,
    /// How much (always positive).
    pub amount: MoneyAmount,
}

/// Settlement planning entry points.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Suggests transfers that zero out every outstanding net balance.
    ///
    /// Greedy matching: the largest debtor pays the largest creditor first,
    /// ties broken by person id so the plan is reproducible. Produces at
    /// most `people - 1` transfers. Nets within `epsilon` of zero are
    /// treated as already settled.
    #[must_use]
    pub fn suggest_transfers(
        balances: &HashMap<PersonId, PersonBalance>,
        epsilon: MoneyAmount,
    ) -> Vec<Transfer> {
        let tolerance = epsilon.abs();

        let mut creditors: Vec<(PersonId, MoneyAmount)> = Vec::new();
        let mut debtors: Vec<(PersonId, MoneyAmount)> = Vec::new();
        for (person_id, balance) in balances {
            let net = balance.net();
            if net > tolerance {
                creditors.push((*person_id, net));
            } else if net < -tolerance {
                debtors.push((*person_id, net.abs()));
            }
        }

        // Largest balances first; person id breaks ties deterministically
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut transfers = Vec::new();
        let mut credit_idx = 0;
        let mut debt_idx = 0;
        while credit_idx < creditors.len() && debt_idx < debtors.len() {
            let amount = creditors[credit_idx].1.min(debtors[debt_idx].1);
            if amount > MoneyAmount::ZERO {
                transfers.push(Transfer {
                    from: debtors[debt_idx].0,
                    to: creditors[credit_idx].0,
                    amount,
                });
            }
            creditors[credit_idx].1 -= amount;
            debtors[debt_idx].1 -= amount;
            if creditors[credit_idx].1 <= tolerance {
                credit_idx += 1;
            }
            if debtors[debt_idx].1 <= tolerance {
                debt_idx += 1;
            }
        }
        transfers
    }

    /// Suggests transfers with the default classifier epsilon.
    #[must_use]
    pub fn suggest_transfers_default(
        balances: &HashMap<PersonId, PersonBalance>,
    ) -> Vec<Transfer> {
        Self::suggest_transfers(balances, BalanceClassifier::default_epsilon())
    }
}
