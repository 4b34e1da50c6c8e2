// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select,
};

/// 通用查询集
///
/// 针对单个实体累积过滤条件，并将select/update/delete
/// 转发给SeaORM的查询构建器。终端操作接受任意实现了
/// [`ConnectionTrait`]的连接，既可以是连接池句柄也可以是事务。
pub struct QuerySet<E: EntityTrait> {
    /// 待执行的select语句
    query: Select<E>,
    /// 累积的过滤条件，update/delete与select共用
    condition: Condition,
}

impl<E: EntityTrait> QuerySet<E> {
    /// 创建针对实体的空查询集
    pub fn new() -> Self {
        Self {
            query: E::find(),
            condition: Condition::all(),
        }
    }

    /// 追加过滤条件（AND语义）
    ///
    /// 接受列表达式（如`Column::Status.eq("active")`）或完整的`Condition`
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: IntoCondition,
    {
        let predicate = predicate.into_condition();
        self.query = self.query.filter(predicate.clone());
        self.condition = self.condition.add(predicate);
        self
    }

    /// 按列排序
    pub fn order_by(mut self, column: E::Column, order: Order) -> Self {
        self.query = self.query.order_by(column, order);
        self
    }

    /// 限制返回行数
    pub fn limit(mut self, limit: u64) -> Self {
        self.query = self.query.limit(limit);
        self
    }

    /// 跳过前若干行
    pub fn offset(mut self, offset: u64) -> Self {
        self.query = self.query.offset(offset);
        self
    }

    /// 取出底层select语句，便于继续用SeaORM的API组合
    pub fn into_select(self) -> Select<E> {
        self.query
    }

    /// 查询所有匹配的记录
    pub async fn all<C: ConnectionTrait>(self, db: &C) -> Result<Vec<E::Model>, DbErr> {
        self.query.all(db).await
    }

    /// 查询第一条匹配的记录
    pub async fn one<C: ConnectionTrait>(self, db: &C) -> Result<Option<E::Model>, DbErr> {
        self.query.one(db).await
    }

    /// 统计匹配的记录数
    pub async fn count<'db, C>(self, db: &'db C) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
        E::Model: FromQueryResult + Sized + Send + Sync + 'db,
    {
        self.query.count(db).await
    }

    /// 是否存在匹配的记录
    pub async fn exists<C: ConnectionTrait>(self, db: &C) -> Result<bool, DbErr> {
        Ok(self.query.limit(1).one(db).await?.is_some())
    }

    /// 插入一条记录并返回落库后的模型
    pub async fn create<'a, C, A>(self, db: &'a C, model: A) -> Result<E::Model, DbErr>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(db).await
    }

    /// 将补丁应用到所有匹配的记录
    ///
    /// 只更新补丁中`Set`过的列
    ///
    /// # 返回值
    ///
    /// 受影响的行数
    pub async fn update<C, A>(self, db: &C, patch: A) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E>,
    {
        let result = E::update_many()
            .set(patch)
            .filter(self.condition)
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    /// 删除所有匹配的记录
    ///
    /// # 返回值
    ///
    /// 受影响的行数
    pub async fn delete<C: ConnectionTrait>(self, db: &C) -> Result<u64, DbErr> {
        let result = E::delete_many().filter(self.condition).exec(db).await?;
        Ok(result.rows_affected)
    }
}

impl<E: EntityTrait> Default for QuerySet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> Clone for QuerySet<E> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            condition: self.condition.clone(),
        }
    }
}

/// 查询集访问特质
///
/// 为所有实体提供Django风格的`objects()`入口：
/// `Entity::objects().filter(..).all(&db)`
pub trait Objects: EntityTrait {
    /// 创建针对该实体的新查询集
    fn objects() -> QuerySet<Self>
    where
        Self: Sized,
    {
        QuerySet::new()
    }
}

impl<E: EntityTrait> Objects for E {}
