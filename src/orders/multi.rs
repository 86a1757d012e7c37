//! Batch methods for OrderService.
//!
//! `order/multi` executes a list of `[tag, payload]` operations in array
//! order, so the caller's ordering is preserved exactly. `order/cancel/multi`
//! takes a bare filter instead.

use log::debug;

use crate::{
    prelude::*,
    types::{Notification, OrderNewRequest, OrderUpdateRequest},
};

use super::{
    ops::{CancelOrderMultiRequest, OrderMultiOpsRequest, OrderOp},
    order_service::OrderService,
    paths,
};

impl OrderService {
    /// Cancel every order matching the filter (IDs, group IDs, client IDs, or all).
    pub async fn cancel_multi(&self, filter: &CancelOrderMultiRequest) -> Result<Notification> {
        if filter.is_ambiguous() {
            debug!("Cancel-multi request combines `all` with explicit filters");
        }
        self.post_for_notification(paths::ORDER_CANCEL_MULTI, filter)
            .await
    }

    /// Cancel the given orders as a single `oc_multi` operation.
    pub async fn cancel_many_by_id(&self, ids: Vec<i64>) -> Result<Notification> {
        self.submit_ops(vec![OrderOp::cancel_many(ids)]).await
    }

    /// Cancel one order through the multi-op endpoint.
    pub async fn cancel_one_by_id(&self, order_id: i64) -> Result<Notification> {
        self.submit_ops(vec![OrderOp::cancel(order_id)]).await
    }

    /// Create one order through the multi-op endpoint.
    pub async fn new_order_op(&self, order: &OrderNewRequest) -> Result<Notification> {
        self.submit_ops(vec![OrderOp::new_order(order)]).await
    }

    /// Update one order through the multi-op endpoint.
    pub async fn update_order_op(&self, order: &OrderUpdateRequest) -> Result<Notification> {
        self.submit_ops(vec![OrderOp::update_order(order)]).await
    }

    /// Send caller-assembled operations as one request, in the given order.
    pub async fn submit_ops(&self, ops: Vec<OrderOp>) -> Result<Notification> {
        debug!("Submitting {} order operations", ops.len());
        let request = OrderMultiOpsRequest::from(ops);
        self.post_for_notification(paths::ORDER_MULTI, &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        codec::JsonCodec,
        orders::testing::{success_notification, RecordingExecutor},
        req::Permission,
        types::NotificationInfo,
        Error,
    };

    fn service(executor: &Arc<RecordingExecutor>) -> OrderService {
        OrderService::new(executor.clone(), Arc::new(JsonCodec))
    }

    fn multi_executor() -> Arc<RecordingExecutor> {
        Arc::new(RecordingExecutor::replying(success_notification(
            "ox_multi-req",
        )))
    }

    #[tokio::test]
    async fn test_cancel_one_by_id_body() -> Result<()> {
        let executor = multi_executor();
        service(&executor).cancel_one_by_id(42).await?;

        let sent = executor.sent();
        assert_eq!(sent[0].path, "order/multi");
        assert_eq!(sent[0].permission, Permission::Write);
        assert_eq!(executor.single_body(), r#"{"ops":[["oc",{"id":42}]]}"#);
        Ok(())
    }

    #[tokio::test]
    async fn test_cancel_many_by_id_body() -> Result<()> {
        let executor = multi_executor();
        service(&executor).cancel_many_by_id(vec![1, 2, 3]).await?;

        assert_eq!(
            executor.single_body(),
            r#"{"ops":[["oc_multi",{"id":[1,2,3]}]]}"#
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_cancel_multi_all_body() -> Result<()> {
        let executor = Arc::new(RecordingExecutor::replying(success_notification(
            "oc_multi-req",
        )));
        let n = service(&executor)
            .cancel_multi(&CancelOrderMultiRequest::cancel_all())
            .await?;

        assert_eq!(n.notification_type, "oc_multi-req");
        assert_eq!(executor.sent()[0].path, "order/cancel/multi");
        assert_eq!(executor.single_body(), r#"{"all":1}"#);
        Ok(())
    }

    #[tokio::test]
    async fn test_cancel_multi_by_group_is_not_wrapped_in_ops() -> Result<()> {
        let executor = multi_executor();
        service(&executor)
            .cancel_multi(&CancelOrderMultiRequest::by_group_ids([100]))
            .await?;
        assert_eq!(executor.single_body(), r#"{"gid":[100]}"#);
        Ok(())
    }

    #[tokio::test]
    async fn test_single_op_helpers_use_their_tags() -> Result<()> {
        let new = OrderNewRequest {
            gid: Some(3),
            order_type: "LIMIT".to_string(),
            symbol: "tETHUSD".to_string(),
            amount: -2.0,
            price: 150.0,
            affiliate_code: Some("ref".to_string()),
            ..Default::default()
        };
        let executor = multi_executor();
        service(&executor).new_order_op(&new).await?;
        assert_eq!(
            executor.single_body(),
            r#"{"ops":[["on",{"gid":3,"type":"LIMIT","symbol":"tETHUSD","amount":"-2","price":"150","meta":{"aff_code":"ref"}}]]}"#
        );

        let update = OrderUpdateRequest {
            id: 5,
            price: Some(151.5),
            hidden: true,
            ..Default::default()
        };
        let executor = multi_executor();
        service(&executor).update_order_op(&update).await?;
        assert_eq!(
            executor.single_body(),
            r#"{"ops":[["ou",{"id":5,"price":"151.5","flags":64}]]}"#
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_ops_preserves_order() -> Result<()> {
        let executor = multi_executor();
        let ops = vec![
            OrderOp::cancel_many([7, 8]),
            OrderOp::cancel(1),
            OrderOp::update_order(&OrderUpdateRequest {
                id: 2,
                delta: Some(-0.1),
                ..Default::default()
            }),
            OrderOp::cancel(3),
        ];
        let tags: Vec<_> = ops.iter().map(OrderOp::tag).collect();
        service(&executor).submit_ops(ops).await?;

        assert_eq!(tags, vec!["oc_multi", "oc", "ou", "oc"]);
        assert_eq!(
            executor.single_body(),
            r#"{"ops":[["oc_multi",{"id":[7,8]}],["oc",{"id":1}],["ou",{"id":2,"delta":"-0.1"}],["oc",{"id":3}]]}"#
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_ops_decodes_nested_results() -> Result<()> {
        let reply = r#"[1575289447641,"ox_multi-req",null,null,[[1575289447641,"oc-req",null,null,[],null,"SUCCESS","ok"],[1575289447642,"oc-req",null,null,[],null,"ERROR","Order not found."]],null,"SUCCESS","Submitting 2 order operations."]"#;
        let executor = Arc::new(RecordingExecutor::replying(reply));
        let n = service(&executor)
            .submit_ops(vec![OrderOp::cancel(1), OrderOp::cancel(2)])
            .await?;

        match n.notify_info {
            NotificationInfo::Notifications(results) => {
                assert_eq!(results.len(), 2);
                assert!(results[0].is_success());
                assert!(!results[1].is_success());
            }
            other => panic!("unexpected notify info {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_batch_notification_is_an_error() {
        let executor = Arc::new(RecordingExecutor::replying(r#"[1575289447641,7]"#));
        let err = service(&executor)
            .submit_ops(vec![OrderOp::cancel(1), OrderOp::cancel_many([2, 3])])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");

        let executor = Arc::new(RecordingExecutor::replying(r#"[1575289447641,"oc-req""#));
        let err = service(&executor).cancel_one_by_id(1).await.unwrap_err();
        assert!(matches!(err, Error::JsonParse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_batch_transport_error_propagates() {
        let executor = Arc::new(RecordingExecutor::failing(Error::GenericRequest(
            "connection reset".to_string(),
        )));
        let err = service(&executor).cancel_one_by_id(1).await.unwrap_err();
        assert!(matches!(err, Error::GenericRequest(_)));
    }
}
