//! Statement builder tests

#[cfg(test)]
mod tests {
    use crate::{BindValue, SortOrder, StatementBuilder, StatementError, SUGGESTED_PAGE_LIMIT};
    use chrono::NaiveDate;

    fn product_builder() -> StatementBuilder {
        StatementBuilder::new()
            .where_clause("productTemplateId = :productTemplateId")
            .order_by("id ASC")
            .limit(SUGGESTED_PAGE_LIMIT)
            .with_bind_variable_value("productTemplateId", 12345_i64)
    }

    // ========================================
    // Rendering
    // ========================================

    #[test]
    fn test_render_full_statement() {
        let statement = product_builder().to_statement().unwrap();

        assert_eq!(
            statement.query(),
            "WHERE productTemplateId = :productTemplateId ORDER BY id ASC LIMIT 500"
        );
        assert_eq!(statement.limit(), Some(500));
        assert_eq!(statement.offset(), 0);
        assert_eq!(
            statement.value("productTemplateId"),
            Some(&BindValue::Number(12345))
        );
    }

    #[test]
    fn test_render_includes_offset_once_advanced() {
        let mut builder = product_builder();
        builder.increase_offset_by(500);

        let statement = builder.to_statement().unwrap();
        assert!(statement.query().ends_with("LIMIT 500 OFFSET 500"));
        assert_eq!(statement.offset(), 500);
    }

    #[test]
    fn test_render_empty_builder() {
        let statement = StatementBuilder::new().to_statement().unwrap();
        assert_eq!(statement.query(), "");
        assert!(statement.values().is_empty());
        assert_eq!(statement.filter(), None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let builder = product_builder()
            .with_bind_variable_value("status", "ACTIVE")
            .with_bind_variable_value("archived", false);

        let first = builder.to_statement().unwrap();
        let second = builder.to_statement().unwrap();
        assert_eq!(first, second);
        assert_eq!(builder.current_offset(), 0);
    }

    #[test]
    fn test_select_from_rendering() {
        let statement = StatementBuilder::new()
            .select("Id, Name")
            .from("Line_Item")
            .where_clause("Status = :status")
            .with_bind_variable_value("status", "READY")
            .limit(10)
            .offset(20)
            .to_statement()
            .unwrap();

        assert_eq!(
            statement.query(),
            "SELECT Id, Name FROM Line_Item WHERE Status = :status LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn test_leading_keywords_are_normalized() {
        let statement = StatementBuilder::new()
            .select("select Id")
            .from("FROM Product")
            .where_clause("  WHERE id > 5 ")
            .order_by("order by id DESC")
            .to_statement()
            .unwrap();

        assert_eq!(
            statement.query(),
            "SELECT Id FROM Product WHERE id > 5 ORDER BY id DESC"
        );
    }

    #[test]
    fn test_keyword_prefix_of_identifier_is_kept() {
        let statement = StatementBuilder::new()
            .where_clause("whereabouts = 'home'")
            .to_statement()
            .unwrap();
        assert_eq!(statement.filter(), Some("whereabouts = 'home'"));
    }

    // ========================================
    // Overwrite semantics
    // ========================================

    #[test]
    fn test_rebinding_keeps_last_value() {
        let builder = StatementBuilder::new()
            .where_clause("id = :id")
            .with_bind_variable_value("id", 1_i64)
            .with_bind_variable_value("id", 2_i64);

        let statement = builder.to_statement().unwrap();
        assert_eq!(statement.values().len(), 1);
        assert_eq!(statement.value("id"), Some(&BindValue::Number(2)));
    }

    #[test]
    fn test_where_and_order_overwrite() {
        let statement = StatementBuilder::new()
            .where_clause("a = 1")
            .where_clause("b = 2")
            .order_by_field("name", SortOrder::Asc)
            .order_by_field("id", SortOrder::Desc)
            .to_statement()
            .unwrap();

        assert_eq!(statement.filter(), Some("b = 2"));
        assert_eq!(statement.order_by(), Some("id DESC"));
    }

    #[test]
    fn test_remove_limit_and_offset() {
        let mut builder = product_builder();
        builder.increase_offset_by(1000);
        let builder = builder.remove_limit_and_offset();

        assert_eq!(builder.current_limit(), None);
        assert_eq!(builder.current_offset(), 0);
        let statement = builder.to_statement().unwrap();
        assert!(!statement.query().contains("LIMIT"));
        assert!(!statement.query().contains("OFFSET"));
    }

    // ========================================
    // Offset arithmetic
    // ========================================

    #[test]
    fn test_increase_offset_accumulates() {
        let mut builder = StatementBuilder::new().limit(100);
        assert_eq!(builder.current_offset(), 0);

        for k in 1..=5 {
            builder.increase_offset_by(100);
            assert_eq!(builder.current_offset(), k * 100);
        }
    }

    #[test]
    fn test_increase_offset_saturates() {
        let mut builder = StatementBuilder::new().offset(u32::MAX - 1);
        builder.increase_offset_by(10);
        assert_eq!(builder.current_offset(), u32::MAX);
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_unbound_placeholder_rejected() {
        let err = StatementBuilder::new()
            .where_clause("id = :id AND status = :status")
            .with_bind_variable_value("id", 1_i64)
            .to_statement()
            .unwrap_err();

        assert_eq!(err, StatementError::UnboundPlaceholder("status".to_string()));
    }

    #[test]
    fn test_placeholder_inside_literal_needs_no_binding() {
        let statement = StatementBuilder::new()
            .where_clause("name = 'a:b'")
            .to_statement();
        assert!(statement.is_ok());
    }

    #[test]
    fn test_unreferenced_binding_is_forwarded() {
        let statement = StatementBuilder::new()
            .where_clause("id = 1")
            .with_bind_variable_value("unused", "x")
            .to_statement()
            .unwrap();
        assert_eq!(statement.value("unused"), Some(&BindValue::from("x")));
    }

    #[test]
    fn test_invalid_bind_variable_name_rejected() {
        let err = StatementBuilder::new()
            .with_bind_variable_value(":id", 1_i64)
            .to_statement()
            .unwrap_err();
        assert_eq!(err, StatementError::InvalidBindVariableName(":id".to_string()));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = StatementBuilder::new()
            .where_clause("id IN (:ids)")
            .with_bind_variable_value("ids", vec![1_i64, 1])
            .to_statement()
            .unwrap_err();
        assert!(matches!(err, StatementError::InvalidValue { ref name, .. } if name == "ids"));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = StatementBuilder::new().limit(0).to_statement().unwrap_err();
        assert_eq!(err, StatementError::ZeroLimit);
    }

    #[test]
    fn test_oversized_limit_is_not_rejected_locally() {
        let statement = StatementBuilder::new().limit(10_000).to_statement().unwrap();
        assert_eq!(statement.limit(), Some(10_000));
    }

    #[test]
    fn test_select_without_from_rejected() {
        let err = StatementBuilder::new().select("Id").to_statement().unwrap_err();
        assert!(matches!(err, StatementError::IncompleteSelect(_)));

        let err = StatementBuilder::new().from("Product").to_statement().unwrap_err();
        assert!(matches!(err, StatementError::IncompleteSelect(_)));
    }

    #[test]
    fn test_typed_values_bind() {
        let date = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap();
        let statement = StatementBuilder::new()
            .where_clause("startDate >= :start AND name LIKE :name AND active = :active")
            .with_bind_variable_value("start", date)
            .with_bind_variable_value("name", "summer%")
            .with_bind_variable_value("active", true)
            .to_statement()
            .unwrap();

        assert_eq!(statement.value("start"), Some(&BindValue::Date(date)));
        assert_eq!(statement.value("active"), Some(&BindValue::Boolean(true)));
    }

    #[test]
    fn test_statement_serializes_query_and_values() {
        let statement = product_builder().to_statement().unwrap();
        let json = serde_json::to_value(&statement).unwrap();

        assert_eq!(json["query"], statement.query());
        assert_eq!(json["values"]["productTemplateId"]["value"], 12345);
    }
}
