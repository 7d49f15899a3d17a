use crate::*;

/// Session facade driven by host notifications.
///
/// Owns every piece of per-session state: the opponent model, the concession
/// schedule, the offer history, and the last votes cast. All entry points
/// take `&mut self`; one party serves one session.
#[derive(Debug)]
pub struct Party {
    me: Option<PartyId>,
    profile: Option<AdditiveProfile>,
    protocol: Protocol,
    progress: Progress,
    model: FrequencyModel,
    schedule: Schedule,
    acceptance: Acceptance,
    voting: VotingPolicy,
    history: OfferHistory,
    received: Option<Bid>,
    votes: Option<Votes>,
    ended: bool,
}

impl Default for Party {
    fn default() -> Self {
        let ref config = Config::default();
        Self {
            me: None,
            profile: None,
            protocol: Protocol::default(),
            progress: Progress::default(),
            model: FrequencyModel::default(),
            schedule: Schedule::new(config),
            acceptance: Acceptance::new(config),
            voting: VotingPolicy::new(config),
            history: OfferHistory::default(),
            received: None,
            votes: None,
            ended: false,
        }
    }
}

impl Party {
    pub fn me(&self) -> Option<&PartyId> {
        self.me.as_ref()
    }
    pub fn profile(&self) -> Option<&AdditiveProfile> {
        self.profile.as_ref()
    }
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
    pub fn progress(&self) -> &Progress {
        &self.progress
    }
    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
    pub fn history(&self) -> &OfferHistory {
        &self.history
    }
    /// Latest bid offered by someone else.
    pub fn received(&self) -> Option<&Bid> {
        self.received.as_ref()
    }
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Dispatch one host notification, returning the reply if it needs one.
    pub fn notify(&mut self, inform: Inform) -> Result<Option<Outbound>> {
        match inform {
            Inform::Settings(settings) => self.configure(settings),
            Inform::ActionDone(action) => self.observe(&action).map(|_| None),
            Inform::YourTurn => {
                let action = self.decide_turn()?;
                self.progress.advance();
                Ok(Some(Outbound::Act(action)))
            }
            Inform::Voting(ref ballot) => self.vote(ballot).map(Outbound::Votes).map(Some),
            Inform::OptIn => Ok(self.opt_in().map(Outbound::Votes)),
            Inform::Finished => {
                self.finish();
                Ok(None)
            }
        }
    }

    /// Bind to a session. Resets every piece of session state.
    ///
    /// Learning sessions are answered right away; nothing is learned.
    pub fn configure(&mut self, settings: Settings) -> Result<Option<Outbound>> {
        if let Protocol::Learn = settings.protocol {
            log::info!("[party] {} has nothing to learn", settings.id);
            self.protocol = settings.protocol;
            self.me = Some(settings.id.clone());
            return Ok(Some(Outbound::LearningDone(settings.id)));
        }
        let profile = AdditiveProfile::try_from(settings.profile)?;
        let ref config = Config::from(&settings.parameters);
        log::info!(
            "[party] {} joins {} over {} with {:?}",
            settings.id,
            settings.protocol,
            profile.domain(),
            config
        );
        self.model = FrequencyModel::default()
            .with_domain(profile.domain().clone(), profile.reservation().cloned());
        self.schedule = Schedule::new(config);
        self.acceptance = Acceptance::new(config);
        self.voting = VotingPolicy::new(config);
        self.history = OfferHistory::default();
        self.received = None;
        self.votes = None;
        self.ended = false;
        self.progress = settings.progress;
        self.protocol = settings.protocol;
        self.profile = Some(profile);
        self.me = Some(settings.id);
        Ok(None)
    }

    /// Fold another party's action into the model and history.
    /// Our own actions echoed back by the host are ignored.
    pub fn observe(&mut self, action: &Action) -> Result<()> {
        if self.me.as_ref() == Some(action.actor()) {
            return Ok(());
        }
        self.model = self.model.with_action(action, &self.progress)?;
        match action {
            Action::Offer { bid, .. } => {
                let estimate = self.model.utility(bid)?;
                log::debug!("[party] {} (opponent utility {})", action, estimate);
                self.history.push(bid.clone());
                self.received = Some(bid.clone());
            }
            Action::Accept { .. } => log::debug!("[party] {}", action),
            Action::EndNegotiation { .. } => log::info!("[party] {}", action),
        }
        Ok(())
    }

    /// Accept the latest received bid or counter with the schedule's next.
    pub fn decide_turn(&mut self) -> Result<Action> {
        if self.ended {
            return Err(NegotiationError::SessionEnded);
        }
        let Self {
            ref me,
            ref profile,
            ref progress,
            ref mut schedule,
            ref acceptance,
            ref history,
            ref received,
            ..
        } = *self;
        let (Some(me), Some(profile)) = (me.as_ref(), profile.as_ref()) else {
            return Err(NegotiationError::UninitializedProfile);
        };
        schedule.prepare(profile)?;
        let reference = schedule.reference()?.clone();
        let aggregate = Aggregate::of(None, None);
        let action = match received.as_ref() {
            Some(bid)
                if acceptance.accepts(profile, Some(bid), &reference, progress, history, aggregate) =>
            {
                Action::Accept {
                    actor: me.clone(),
                    bid: bid.clone(),
                }
            }
            _ => Action::Offer {
                actor: me.clone(),
                bid: schedule.next(profile, progress)?,
            },
        };
        log::debug!("[party] round {}: {}", progress, action);
        Ok(action)
    }

    /// Approve every candidate the acceptance rule would take.
    pub fn vote(&mut self, ballot: &Ballot) -> Result<Votes> {
        if self.ended {
            return Err(NegotiationError::SessionEnded);
        }
        let Self {
            ref me,
            ref profile,
            ref progress,
            ref mut schedule,
            ref acceptance,
            ref voting,
            ref history,
            ..
        } = *self;
        let (Some(me), Some(profile)) = (me.as_ref(), profile.as_ref()) else {
            return Err(NegotiationError::UninitializedProfile);
        };
        schedule.prepare(profile)?;
        let reference = schedule.reference()?;
        let votes = voting.vote(me, ballot, |bid, aggregate| {
            acceptance.accepts(profile, Some(bid), reference, progress, history, aggregate)
        });
        log::debug!("[voting] {}", votes);
        self.votes = Some(votes.clone());
        Ok(votes)
    }

    /// Votes from the latest voting round, to be confirmed again.
    pub fn opt_in(&self) -> Option<Votes> {
        if self.votes.is_none() {
            log::warn!("[party] opt-in without a prior voting round");
        }
        self.votes.clone()
    }

    /// Terminal transition. Later turns and votes fail.
    pub fn finish(&mut self) {
        log::info!(
            "[party] finished at {} after {} opponent offers",
            self.progress,
            self.history.len()
        );
        self.schedule.end();
        self.ended = true;
    }
}
