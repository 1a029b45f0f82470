//! 自定义断言辅助模块

use cypherdsl::core::DslError;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果是无效参数错误，且消息包含指定内容
pub fn assert_invalid_argument<T: std::fmt::Debug>(result: Result<T, DslError>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    assert!(
        matches!(err, DslError::InvalidArgument(_)),
        "应为无效参数错误, 实际是 {:?}",
        err
    );
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言关键字在文本中恰好出现一次
pub fn assert_keyword_once(text: &str, keyword: &str) {
    assert_eq!(
        text.matches(keyword).count(),
        1,
        "关键字 '{}' 应出现一次: {}",
        keyword,
        text
    );
}
